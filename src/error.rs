//! Error types for the Salvia library.
//!
//! All errors are represented by the [`SalviaError`] enum. There are exactly
//! two contract-level kinds: [`SalviaError::InvalidArgument`], raised before
//! any corpus interaction when a caller passes an empty or whitespace-only
//! word, and [`SalviaError::Corpus`], a failure surfaced by a corpus source
//! and passed through to the caller untouched.
//!
//! # Examples
//!
//! ```
//! use salvia::error::{Result, SalviaError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(SalviaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Salvia operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum SalviaError {
    /// A caller-supplied word was empty or whitespace-only
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure surfaced by a corpus source
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// I/O errors (corpus files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SalviaError.
pub type Result<T> = std::result::Result<T, SalviaError>;

impl SalviaError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SalviaError::InvalidArgument(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SalviaError::Corpus(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SalviaError::Other(msg.into())
    }
}
