//! Console error types

use thiserror::Error;

/// Console error with stable code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("E01: unknown command")]
    UnknownCommand,
    #[error("E02: invalid value")]
    InvalidValue,
    #[error("E03: missing argument")]
    MissingArg,
    #[error("E04: out of range")]
    OutOfRange,
    #[error("E05: requires 'confirm'")]
    RequiresConfirm,
    #[error("E06: unknown parameter")]
    UnknownParam,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::InvalidValue => "E02",
            Self::MissingArg => "E03",
            Self::OutOfRange => "E04",
            Self::RequiresConfirm => "E05",
            Self::UnknownParam => "E06",
        }
    }
}
