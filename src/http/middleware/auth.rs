//! Caller authentication middleware.
//!
//! The gate runs before the connect handler: it resolves an [`AuthContext`]
//! from the `Authorization` header via the configured [`AuthValidator`] and
//! short-circuits with 401 on any failure. The backend is never contacted
//! for an unauthenticated caller.

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::http::server::AppState;

/// Credential material attached to an authenticated request.
///
/// Immutable for the request's lifetime; carries exactly the header needed
/// to authorize the outbound backend call on the caller's behalf.
#[derive(Clone, Debug)]
pub struct AuthContext {
    authorization: HeaderValue,
}

impl AuthContext {
    pub fn new(authorization: HeaderValue) -> Self {
        Self { authorization }
    }

    /// The caller's `Authorization` header value, propagated verbatim to
    /// the backend.
    pub fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }
}

/// Why a caller was rejected at the gate.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingCredentials,

    #[error("malformed Authorization header")]
    MalformedCredentials,

    #[error("credentials rejected")]
    Rejected,
}

/// Seam for the external authentication collaborator.
///
/// Deployments plug in their identity provider here; the gateway only cares
/// whether the header is acceptable.
#[async_trait]
pub trait AuthValidator: Send + Sync {
    async fn validate(&self, authorization: &str) -> Result<(), AuthError>;
}

/// Default validator: a shared key in `Authorization: Bearer <key>`.
pub struct BearerKeyValidator {
    key: String,
}

impl BearerKeyValidator {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait]
impl AuthValidator for BearerKeyValidator {
    async fn validate(&self, authorization: &str) -> Result<(), AuthError> {
        let token = authorization
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MalformedCredentials)?;
        if token == self.key {
            Ok(())
        } else {
            Err(AuthError::Rejected)
        }
    }
}

/// Axum middleware wrapping the connect handler.
///
/// On success the request gains an [`AuthContext`] extension; on failure the
/// caller gets `401 {"error": ...}` and the inner handler never runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let header_value = match request.headers().get(header::AUTHORIZATION) {
        Some(value) => value.clone(),
        None => return unauthorized(AuthError::MissingCredentials),
    };

    let header_str = match header_value.to_str() {
        Ok(s) => s,
        Err(_) => return unauthorized(AuthError::MalformedCredentials),
    };

    if let Err(e) = state.validator.validate(header_str).await {
        return unauthorized(e);
    }

    request
        .extensions_mut()
        .insert(AuthContext::new(header_value));
    next.run(request).await
}

fn unauthorized(error: AuthError) -> Response {
    warn!(error = %error, "Rejected unauthenticated request");
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}
