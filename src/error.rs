//! Error types for tmd operations.

use thiserror::Error;

/// Errors an engine can report back to the dispatcher.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The native routine takes a C `int` length.
    #[error("input of {0} bytes is too large for the native engine")]
    InputTooLarge(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
