//! Command line parser
//!
//! Simple split on whitespace.

/// Parsed command line
#[derive(Debug, Clone, Default)]
pub struct ParsedCommand<'a> {
    /// The command name (first token)
    pub command: &'a str,
    /// Remaining tokens
    pub args: Vec<&'a str>,
}

impl<'a> ParsedCommand<'a> {
    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied()
    }
}

/// Parse a command line into command and arguments
pub fn parse_line(line: &str) -> ParsedCommand<'_> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    ParsedCommand {
        command,
        args: parts.collect(),
    }
}
