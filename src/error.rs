//! Transport error types
//!
//! The error taxonomy mirrors the transport's failure surface: construction
//! failures (malformed DSN, proxy URL, or header), the locally generated
//! rate-limit rejection, server error statuses, and network-level failures.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while constructing or using the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The DSN connection string could not be parsed.
    ///
    /// Fatal to construction; a transport is never created from a malformed
    /// DSN, so `send` can assume a valid endpoint.
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    /// The configured or environment-supplied proxy URL could not be parsed.
    #[error("invalid proxy URL: {0}")]
    InvalidProxy(String),

    /// An extra header name or value was rejected at configuration time.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The transport is inside a server-imposed lockout window.
    ///
    /// Raised locally, without a network call, until the window expires.
    #[error("Transport locked till {} due to too many requests", .until.to_rfc3339())]
    RateLimited {
        /// Instant at which sends unlock again.
        until: DateTime<Utc>,
    },

    /// The server responded with a non-2xx status.
    #[error("HTTP Error ({status}){}", detail_suffix(.detail))]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Diagnostic detail from the `x-sentry-error` header, when present.
        detail: Option<String>,
    },

    /// A network-level failure before any status was received.
    ///
    /// Lockout state is left untouched by these.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}
