//! Error taxonomy for schedule retrieval and parsing.

use thiserror::Error;

/// Errors raised while fetching or parsing one schedule endpoint.
///
/// All variants carry the offending URL so diagnostics can name the
/// exact (date, channel group) feed that failed.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The HTTP request could not be completed.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Offending feed URL.
        url: String,
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// Offending feed URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected schedule JSON shape.
    #[error("malformed schedule from {url}: {detail}")]
    Malformed {
        /// Offending feed URL.
        url: String,
        /// What was missing or mistyped.
        detail: String,
    },
}
