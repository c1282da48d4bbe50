//! Error types for the Parlance library.
//!
//! All errors are represented by the [`ParlanceError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use parlance::error::{ParlanceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ParlanceError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Parlance operations.
///
/// This enum represents all possible errors that can occur in the Parlance
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum ParlanceError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Vectorization-related errors (fitting, transforming)
    #[error("Vectorize error: {0}")]
    Vectorize(String),

    /// Record store errors (FAQ corpus, order registry)
    #[error("Store error: {0}")]
    Store(String),

    /// Model errors (training, artifacts, prediction)
    #[error("Model error: {0}")]
    Model(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

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

/// Result type alias for operations that may fail with ParlanceError.
pub type Result<T> = std::result::Result<T, ParlanceError>;

impl ParlanceError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Analysis(msg.into())
    }

    /// Create a new vectorize error.
    pub fn vectorize<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Vectorize(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Store(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Model(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(format!("Not found: {}", msg.into()))
    }
}
