//! # hwctl
//!
//! Interactive line-oriented console for hardware management.
//!
//! ## Architecture
//!
//! One [`console::Console`] per session owns all mutable state:
//! - [`console::HistoryBuffer`] — bounded ring of submitted lines with an
//!   independent navigation cursor (up/down recall, in-place re-edit)
//! - [`console::LineBuffer`] — the in-progress input line
//! - [`console::Completer`] — tab completion over injected candidate tables
//! - [`params::ParamStore`] — runtime values for the hardware parameters
//!
//! The binary feeds raw stdin bytes into `Console::process_byte`; the
//! library performs no I/O beyond the `fmt::Write` sink it is handed.

pub mod console;
pub mod params;

pub use console::{Console, ConsoleError, HistoryBuffer};
pub use params::{ParamStore, ParamValue};
