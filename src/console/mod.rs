//! Interactive console for configuration and diagnostics
//!
//! Byte-at-a-time state machine over a raw-mode terminal.
//! All state is owned by one [`Console`] per session.

pub mod commands;
pub mod completion;
#[allow(clippy::module_inception)]
pub mod console;
pub mod error;
pub mod history;
pub mod line_buffer;
pub mod parser;

pub use commands::{command_names, execute, CommandContext, COMMANDS, VERSION};
pub use completion::Completer;
pub use console::{Console, ConsoleEvent, HISTORY_CAPACITY};
pub use error::ConsoleError;
pub use history::HistoryBuffer;
pub use line_buffer::LineBuffer;
pub use parser::{parse_line, ParsedCommand};
