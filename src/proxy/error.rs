//! Error definitions for the forwarding path.

use thiserror::Error;

/// Errors that can occur while forwarding a connection request.
///
/// All variants collapse to `500 {"error": message}` at the handler
/// boundary; the distinction exists for logging and tests. `Display` is the
/// exact message the client sees, so `Backend` and `Transport` carry raw
/// messages with no prefix.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Inbound body was not parseable JSON.
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Backend { message: String },

    /// Network-level failure reaching the backend.
    #[error("{0}")]
    Transport(String),
}

impl ForwardError {
    /// Build a `Transport` error carrying the full cause chain, since the
    /// top-level hyper error alone ("client error (Connect)") hides the
    /// interesting part.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ForwardError::Transport(message)
    }
}
