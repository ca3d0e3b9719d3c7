//! Catalog error types.
//!
//! "Not found" is not an error: sources return `Ok(None)` for it.

use thiserror::Error;

/// Errors that can occur when fetching from a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The lookup did not complete within the configured bound.
    #[error("catalog lookup timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout, in seconds.
        timeout_secs: u64,
    },

    /// Failed to parse a catalog response.
    #[error("parse error: {0}")]
    Parse(String),
}
