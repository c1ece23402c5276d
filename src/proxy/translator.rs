//! Backend response normalization.
//!
//! # Responsibilities
//! - Pass 2xx bodies through to the client verbatim
//! - Turn non-2xx answers into an error message, preferring the backend's
//!   `detail` field over the fixed fallback

use serde_json::Value;

use crate::proxy::error::ForwardError;
use crate::proxy::forwarder::BackendResponse;

/// Message used when a failed backend answer carries no usable `detail`.
pub const FALLBACK_ERROR: &str = "Failed to connect OAuth integration";

/// Translate one backend response into the client-facing result.
///
/// The backend's own success judgement is authoritative: any 2xx is a
/// pass-through, anything else is a failure. The client contract is
/// JSON-in/JSON-out, so a 2xx with an unparseable body is a failure too.
pub fn translate(response: BackendResponse) -> Result<Value, ForwardError> {
    if response.status.is_success() {
        return serde_json::from_slice(&response.body).map_err(|e| ForwardError::Backend {
            message: format!("invalid backend response: {}", e),
        });
    }

    let message = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| FALLBACK_ERROR.to_string());

    Err(ForwardError::Backend { message })
}
