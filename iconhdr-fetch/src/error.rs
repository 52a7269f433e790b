//! Typed error for source retrieval.

use thiserror::Error;

/// Failure to obtain a metadata document or glyph binary.
///
/// Every variant carries the location that failed so the batch driver can
/// report exactly which unit was skipped.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The server answered with a non-success status code.
    #[error("download failed for '{location}': HTTP status {status}")]
    HttpStatus {
        /// The URL that was requested.
        location: String,
        /// The status code the server returned.
        status: u16,
    },

    /// The request could not be completed: DNS, connect, TLS, timeout, or a
    /// truncated/oversized body.
    #[error("download failed for '{location}': {source}")]
    Transport {
        /// The URL that was requested.
        location: String,
        /// Underlying transport error.
        #[source]
        source: Box<ureq::Error>,
    },

    /// The location was a filesystem path that is missing or unreadable.
    #[error("file missing or unreadable at '{location}': {source}")]
    File {
        /// The path that was read.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RetrievalError {
    /// The source location this error refers to.
    pub fn location(&self) -> &str {
        match self {
            RetrievalError::HttpStatus { location, .. }
            | RetrievalError::Transport { location, .. }
            | RetrievalError::File { location, .. } => location,
        }
    }
}
