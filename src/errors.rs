/*!
 * Error types for the automtl library.
 *
 * This module contains custom error types for the different parts of the
 * library, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The provider answered but produced no translated text
    #[error("Provider returned an empty translation")]
    EmptyTranslation,
}

/// Errors that can occur when reading or writing the durable cache
///
/// These never escape `Translator::translate`; the cache logs them and
/// keeps the in-memory state as the source of truth. They are surfaced
/// here so tests can exercise the failure paths directly.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Error from a filesystem operation
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing the cache contents
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
