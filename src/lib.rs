//! # Quiver
//!
//! A typed result set wrapper for search engine responses.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Typed access to hits, total counts, max scores, and facets
//! - Tolerant coercion of loosely typed payload fields
//! - Re-iterable cursor traversal plus native `for` loop support
//!
//! Quiver sits on top of an already-fetched engine reply: the transport
//! layer hands over the decoded JSON body, and [`result_set::ResultSet`]
//! exposes the matched documents and summary metadata.

pub mod error;
pub mod response;
pub mod result;
pub mod result_set;
pub mod util;

pub mod prelude {
    pub use crate::error::{QuiverError, Result};
    pub use crate::response::Response;
    pub use crate::result::SearchResult;
    pub use crate::result_set::ResultSet;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
