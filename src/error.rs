//! Error types for hal-interp.

use thiserror::Error;

/// Result type for hal-interp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while interpreting a HAL document.
///
/// Malformed link data never shows up here; it degrades into links without
/// a target instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A CURIE template has no `{rel}` placeholder to substitute into.
    #[error("CURIE '{name}' has no {{rel}} placeholder in template: {template}")]
    InvalidCurieTemplate { name: String, template: String },

    /// Error occurred while parsing JSON text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured context URL is not an absolute URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
