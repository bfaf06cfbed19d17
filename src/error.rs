//! Error types for the Quiver library.
//!
//! All failures are represented by the [`QuiverError`] enum. The only
//! fatal condition in normal operation is a reply whose shape does not
//! match what the engine is expected to send; everything else degrades
//! to defaults at the call site.
//!
//! # Examples
//!
//! ```
//! use quiver::error::{QuiverError, Result};
//!
//! fn check_shape(has_hits: bool) -> Result<()> {
//!     if !has_hits {
//!         return Err(QuiverError::malformed("reply has no hits section"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_shape(false).is_err());
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Quiver operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenience constructors for the string-carrying variants.
#[derive(Error, Debug)]
pub enum QuiverError {
    /// The reply lacks the structure the engine contract guarantees.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A fault reported by the engine inside the reply body.
    #[error("Response error: {0}")]
    Response(String),

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

/// Result type alias for operations that may fail with QuiverError.
pub type Result<T> = std::result::Result<T, QuiverError>;

impl QuiverError {
    /// Create a new malformed-response error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        QuiverError::MalformedResponse(msg.into())
    }

    /// Create a new response error.
    pub fn response<S: Into<String>>(msg: S) -> Self {
        QuiverError::Response(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuiverError::Other(msg.into())
    }
}
