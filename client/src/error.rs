//! Error types for the AgentCast client.

use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// The public streaming methods on [`StreamClient`](crate::client::StreamClient)
/// absorb these and log them; callers only encounter this type when matching
/// on diagnostics.
#[derive(Error, Debug)]
pub enum StreamError {
    /// HTTP transport failure (connect error, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded with a non-success status.
    #[error("server responded with status {status}")]
    Server { status: u16 },
}
