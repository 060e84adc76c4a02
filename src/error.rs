//! Error types.

use std::io;

use thiserror::Error;

/// A generation request that cannot produce a password.
///
/// The selection variants display the same user-facing message; the variant
/// itself records which precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Please select at least 1 option.")]
    EmptyPool,

    #[error("Please select at least 1 option.")]
    NonPositiveLength(i64),

    #[error("Please select at least 1 option.")]
    InvalidCodePoint(u32),

    #[error("Password length must be at most 1,048,576.")]
    LengthTooLarge(i64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Configuration(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
