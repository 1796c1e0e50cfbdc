//! Command handlers

use std::fmt::Write;

use log::{debug, warn};

use super::history::HistoryBuffer;
use super::parser::ParsedCommand;
use super::ConsoleError;
use crate::params::{find_param, find_params_matching, ParamStore, ParamType, ParamValue, PARAMS};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Mutable console state handed to command handlers
pub struct CommandContext<'a> {
    pub params: &'a mut ParamStore,
    pub history: &'a mut HistoryBuffer,
}

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: fn(&ParsedCommand<'_>, &mut CommandContext<'_>, &mut dyn Write) -> Result<(), ConsoleError>,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", brief: "List commands", handler: cmd_help },
    CommandDescriptor { name: "set", brief: "Set parameter value", handler: cmd_set },
    CommandDescriptor { name: "show", brief: "Show parameters", handler: cmd_show },
    CommandDescriptor { name: "history", brief: "List or clear command history", handler: cmd_history },
    CommandDescriptor { name: "status", brief: "Session status", handler: cmd_status },
    CommandDescriptor { name: "reset", brief: "Restore parameter defaults", handler: cmd_reset },
];

/// Execute a parsed command
pub fn execute(
    cmd: &ParsedCommand<'_>,
    ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if cmd.command.is_empty() {
        return Ok(()); // Empty line, do nothing
    }

    let handler = COMMANDS
        .iter()
        .find(|c| c.name == cmd.command)
        .ok_or(ConsoleError::UnknownCommand)?;

    debug!("dispatching '{}'", cmd.command);
    let result = (handler.handler)(cmd, ctx, out);
    if let Err(e) = &result {
        warn!("'{}' failed: {}", cmd.command, e);
    }
    result
}

/// Get all command names for completion
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

// --- Command Implementations ---

fn cmd_help(
    cmd: &ParsedCommand<'_>,
    _ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if let Some(name) = cmd.arg(0) {
        // Help for specific command
        if let Some(c) = COMMANDS.iter().find(|c| c.name == name) {
            let _ = writeln!(out, "{}: {}", c.name, c.brief);
        } else {
            return Err(ConsoleError::UnknownCommand);
        }
    } else {
        // List all commands
        for c in COMMANDS {
            let _ = writeln!(out, "  {:<10} {}", c.name, c.brief);
        }
    }
    Ok(())
}

fn cmd_set(
    cmd: &ParsedCommand<'_>,
    ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let name = cmd.arg(0).ok_or(ConsoleError::MissingArg)?;
    let value = cmd.arg(1).ok_or(ConsoleError::MissingArg)?;

    let param = find_param(name).ok_or(ConsoleError::UnknownParam)?;

    // Parse value based on type
    let pval = match param.param_type {
        ParamType::Bool => {
            let v = match value {
                "true" | "1" | "on" => true,
                "false" | "0" | "off" => false,
                _ => return Err(ConsoleError::InvalidValue),
            };
            ParamValue::Bool(v)
        }
        ParamType::U8 { min, max } => {
            let v: u8 = value.parse().map_err(|_| ConsoleError::InvalidValue)?;
            if v < min || v > max {
                return Err(ConsoleError::OutOfRange);
            }
            ParamValue::U8(v)
        }
        ParamType::U16 { min, max } => {
            let v: u16 = value.parse().map_err(|_| ConsoleError::InvalidValue)?;
            if v < min || v > max {
                return Err(ConsoleError::OutOfRange);
            }
            ParamValue::U16(v)
        }
        ParamType::U32 { min, max } => {
            let v: u32 = value.parse().map_err(|_| ConsoleError::InvalidValue)?;
            if v < min || v > max {
                return Err(ConsoleError::OutOfRange);
            }
            ParamValue::U32(v)
        }
        ParamType::Enum { max } => {
            let v: u8 = value.parse().map_err(|_| ConsoleError::InvalidValue)?;
            if v > max {
                return Err(ConsoleError::OutOfRange);
            }
            ParamValue::U8(v)
        }
    };

    ctx.params.set(name, pval);
    let _ = writeln!(out, "{}={}", name, value);
    Ok(())
}

fn cmd_show(
    cmd: &ParsedCommand<'_>,
    ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if let Some(pattern) = cmd.arg(0) {
        if pattern.ends_with('*') {
            // Wildcard match
            for p in find_params_matching(pattern) {
                if let Some(val) = ctx.params.get(p.name) {
                    let _ = writeln!(out, "{}={}", p.name, val);
                }
            }
        } else {
            // Single parameter
            let param = find_param(pattern).ok_or(ConsoleError::UnknownParam)?;
            if let Some(val) = ctx.params.get(param.name) {
                let _ = writeln!(out, "{}={}", param.name, val);
            }
        }
    } else {
        // Show all
        for (name, val) in ctx.params.iter() {
            let _ = writeln!(out, "{}={}", name, val);
        }
    }
    Ok(())
}

fn cmd_history(
    cmd: &ParsedCommand<'_>,
    ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    match cmd.arg(0) {
        None => {
            // Oldest first; the just-submitted "history" line is included
            for (i, entry) in ctx.history.iter().enumerate() {
                let _ = writeln!(out, "{:4}  {}", i + 1, entry);
            }
            Ok(())
        }
        Some("clear") => {
            ctx.history.clear();
            let _ = writeln!(out, "history cleared");
            Ok(())
        }
        Some(_) => Err(ConsoleError::InvalidValue),
    }
}

fn cmd_status(
    _cmd: &ParsedCommand<'_>,
    ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let _ = writeln!(out, "{}", VERSION);
    let _ = writeln!(out, "parameters: {}", PARAMS.len());
    let _ = writeln!(
        out,
        "history: {}/{} entries",
        ctx.history.len(),
        ctx.history.capacity()
    );
    Ok(())
}

fn cmd_reset(
    cmd: &ParsedCommand<'_>,
    ctx: &mut CommandContext<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if cmd.arg(0) != Some("confirm") {
        return Err(ConsoleError::RequiresConfirm);
    }

    ctx.params.reset();
    let _ = writeln!(out, "parameters restored to defaults");
    Ok(())
}
