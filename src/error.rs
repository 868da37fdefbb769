//! Error types for classwise operations.
//!
//! Validation outcomes are never errors; they travel as [`crate::Verdict`]
//! data. This enum covers only host-facing failures (CLI I/O, bad arguments).

use thiserror::Error;

/// Errors that can occur on the host-facing surface of the checker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
