//! Main console struct integrating all components

use std::fmt::Write;

use super::commands::{command_names, execute, CommandContext, VERSION};
use super::{parse_line, Completer, ConsoleError, HistoryBuffer, LineBuffer};
use crate::params::{param_names, ParamStore};

/// Default number of history entries kept per session
pub const HISTORY_CAPACITY: usize = 32;

/// Console state machine
pub struct Console {
    line: LineBuffer,
    history: HistoryBuffer,
    completer: Completer,
    params: ParamStore,
    /// Escape sequence state
    escape_state: EscapeState,
    /// The current line has edits not yet persisted to history
    line_modified: bool,
    /// The newest history entry is an unconfirmed draft
    draft_stashed: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum EscapeState {
    Normal,
    Escape,      // Got ESC
    Bracket,     // Got ESC [
}

/// Outcome of a completed input line
pub enum ConsoleEvent {
    /// A submitted line was dispatched to a command handler
    Executed(Result<(), ConsoleError>),
    /// The user asked to leave the session (Ctrl+D, `exit`, `quit`)
    Exit,
}

impl Console {
    /// Create new console with room for `history_capacity` recalled lines
    pub fn new(history_capacity: usize) -> Self {
        Self {
            line: LineBuffer::new(),
            history: HistoryBuffer::new(history_capacity),
            completer: Completer::new(),
            params: ParamStore::new(),
            escape_state: EscapeState::Normal,
            line_modified: false,
            draft_stashed: false,
        }
    }

    /// Recorded history, for inspection
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Parameter values, for inspection
    pub fn params(&self) -> &ParamStore {
        &self.params
    }

    /// Current in-progress line, for inspection
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Process a single input byte
    ///
    /// Returns Some(event) if a line completed, None if more input is needed.
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> Option<ConsoleEvent> {
        match self.escape_state {
            EscapeState::Normal => self.process_normal(byte, out),
            EscapeState::Escape => {
                if byte == b'[' {
                    self.escape_state = EscapeState::Bracket;
                } else {
                    self.escape_state = EscapeState::Normal;
                }
                None
            }
            EscapeState::Bracket => {
                self.escape_state = EscapeState::Normal;
                match byte {
                    b'A' => self.handle_up(out),    // Up arrow
                    b'B' => self.handle_down(out),  // Down arrow
                    _ => {}
                }
                None
            }
        }
    }

    fn process_normal(&mut self, byte: u8, out: &mut dyn Write) -> Option<ConsoleEvent> {
        match byte {
            // Enter
            b'\r' | b'\n' => self.handle_submit(out),

            // Backspace
            0x7F | 0x08 => {
                if !self.line.is_empty() {
                    self.line.backspace();
                    // Echo: backspace, space, backspace
                    let _ = write!(out, "\x08 \x08");
                    self.line_modified = true;
                }
                self.completer.reset();
                None
            }

            // Tab
            b'\t' => {
                self.handle_tab(out);
                None
            }

            // Escape
            0x1B => {
                self.escape_state = EscapeState::Escape;
                None
            }

            // Ctrl+C: abandon the line; a stashed draft is retracted
            0x03 => {
                let _ = writeln!(out, "^C");
                if self.draft_stashed {
                    self.history.remove_last();
                    self.draft_stashed = false;
                }
                self.history.cursor_to_end();
                self.line.clear();
                self.line_modified = false;
                self.completer.reset();
                self.print_prompt(out);
                None
            }

            // Ctrl+D on an empty line leaves the session
            0x04 => {
                if self.line.is_empty() {
                    let _ = writeln!(out);
                    Some(ConsoleEvent::Exit)
                } else {
                    None
                }
            }

            // Ctrl+U (clear line)
            0x15 => {
                // Clear the displayed line
                for _ in 0..self.line.len() {
                    let _ = write!(out, "\x08 \x08");
                }
                self.line.clear();
                self.line_modified = true;
                None
            }

            // Printable character
            0x20..=0x7E => {
                self.line.push(byte as char);
                let _ = write!(out, "{}", byte as char);
                self.completer.reset();
                self.line_modified = true;
                None
            }

            _ => None,
        }
    }

    fn handle_submit(&mut self, out: &mut dyn Write) -> Option<ConsoleEvent> {
        let _ = writeln!(out);
        let line = self.line.as_str().trim().to_string();
        self.line.clear();
        self.line_modified = false;
        self.completer.reset();

        if line.is_empty() {
            // Nothing submitted; an edit session that stashed a draft
            // ended without confirming it
            if self.draft_stashed {
                self.history.remove_last();
                self.draft_stashed = false;
            }
            self.history.cursor_to_end();
            self.print_prompt(out);
            return None;
        }

        // A stashed draft becomes the final entry in place; otherwise the
        // submitted line opens a new slot
        if self.draft_stashed {
            self.history.accept(&line);
            self.draft_stashed = false;
        } else {
            self.history.append(&line);
        }
        self.history.cursor_to_end();

        let cmd = parse_line(&line);
        if cmd.command == "exit" || cmd.command == "quit" {
            return Some(ConsoleEvent::Exit);
        }

        let mut ctx = CommandContext {
            params: &mut self.params,
            history: &mut self.history,
        };
        let result = execute(&cmd, &mut ctx, out);
        if let Err(e) = &result {
            let _ = writeln!(out, "{}", e);
        }
        self.print_prompt(out);
        Some(ConsoleEvent::Executed(result))
    }

    fn handle_tab(&mut self, out: &mut dyn Write) {
        let input = self.line.as_str();

        // Count words to determine what to complete
        let word_count = input.split_whitespace().count();
        let last_word_start = input.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let prefix = input[last_word_start..].to_string();

        let candidates: Vec<&'static str> = if word_count <= 1 && !input.ends_with(' ') {
            // Complete command (first word, no trailing space)
            command_names().collect()
        } else {
            // Complete parameter (after command)
            param_names().collect()
        };

        if let Some(completed) = self.completer.complete(&prefix, &candidates) {
            // Clear current word and replace with completion
            for _ in 0..prefix.len() {
                self.line.backspace();
                let _ = write!(out, "\x08 \x08");
            }

            for c in completed.chars() {
                self.line.push(c);
                let _ = write!(out, "{}", c);
            }
            self.line_modified = true;
        }
    }

    fn handle_up(&mut self, out: &mut dyn Write) {
        if !self.history.previous_available() {
            return;
        }

        // Persist edits at the current position before navigating away.
        // At live-edit this stashes the line as a draft entry.
        if self.line_modified {
            let at_live_edit = !self.history.is_browsing();
            self.history.update(self.line.as_str());
            if at_live_edit && !self.line.is_empty() {
                self.draft_stashed = true;
            }
        }

        if let Some(prev) = self.history.previous() {
            let text = prev.to_string();
            self.replace_line(&text, out);
        }
    }

    fn handle_down(&mut self, out: &mut dyn Write) {
        if !self.history.is_browsing() {
            return;
        }

        if self.line_modified {
            self.history.update(self.line.as_str());
        }

        match self.history.next() {
            Some(next) => {
                let text = next.to_string();
                self.replace_line(&text, out);
            }
            None => {
                // Cursor sits on the newest entry; one unchecked advance
                // lands exactly on the live-edit position
                self.history.increment_cursor();
                self.replace_line("", out);
            }
        }
    }

    fn replace_line(&mut self, new_line: &str, out: &mut dyn Write) {
        // Clear displayed line
        for _ in 0..self.line.len() {
            let _ = write!(out, "\x08 \x08");
        }

        // Set and display new line
        self.line.set(new_line);
        self.line_modified = false;
        let _ = write!(out, "{}", new_line);
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = write!(out, "hwctl> ");
    }

    /// Print welcome banner
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "{}", VERSION);
        let _ = writeln!(out, "Type 'help' for commands.");
        self.print_prompt(out);
    }
}
