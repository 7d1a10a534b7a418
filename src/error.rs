//! Error types for the Lexiclass library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexiclassError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexiclass::error::{LexiclassError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexiclassError::invalid_argument("smoothing must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexiclass operations.
///
/// Label case mismatches and unseen words never surface here: they are
/// normalized away by the classifier. What remains are conditions the caller
/// has to act on.
#[derive(Error, Debug)]
pub enum LexiclassError {
    /// I/O errors (reading datasets, prompting for input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed training or evaluation data
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// An argument outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inference requested before any category was trained
    #[error("Untrained model: no categories have been trained")]
    UntrainedModel,

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexiclassError.
pub type Result<T> = std::result::Result<T, LexiclassError>;

impl LexiclassError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexiclassError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        LexiclassError::Dataset(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexiclassError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexiclassError::InvalidArgument(format!("invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexiclassError::Other(msg.into())
    }
}
