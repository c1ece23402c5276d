//! Outbound request construction and dispatch.
//!
//! # Responsibilities
//! - Check the inbound body parses as JSON before any backend work
//! - Build the backend POST with propagated Authorization header
//! - Surface transport failures distinctly from backend status failures

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode, Uri};
use bytes::Bytes;
use hyper_util::client::legacy::{connect::HttpConnector, Client};

use crate::http::middleware::auth::AuthContext;
use crate::proxy::error::ForwardError;

/// Path of the connect operation on the backend integration service.
pub const CONNECT_OAUTH_PATH: &str = "/integrations/connect/oauth";

/// Maximum backend response body we are willing to buffer.
const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Raw result of one outbound call, consumed by the translator.
#[derive(Debug)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Forwards connection requests to the backend integration service.
///
/// The endpoint is fixed at construction; per-request resolution is
/// deliberately impossible.
#[derive(Clone)]
pub struct ProxyForwarder {
    client: Client<HttpConnector, Body>,
    endpoint: String,
}

impl ProxyForwarder {
    /// Create a forwarder for the given backend base URL.
    ///
    /// A trailing slash on the endpoint is trimmed so path joining is
    /// stable regardless of how the URL was written.
    pub fn new(client: Client<HttpConnector, Body>, endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            endpoint.pop();
        }
        Self { client, endpoint }
    }

    /// Resolved backend base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward one connection request.
    ///
    /// The original bytes are forwarded untouched (no field filtering, no
    /// re-ordering); parsing is only a validity gate.
    pub async fn forward(
        &self,
        body: &Bytes,
        auth: &AuthContext,
    ) -> Result<BackendResponse, ForwardError> {
        let _payload: serde_json::Value = serde_json::from_slice(body)?;

        let uri: Uri = format!("{}{}", self.endpoint, CONNECT_OAUTH_PATH)
            .parse()
            .map_err(ForwardError::transport)?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, auth.authorization().clone())
            .body(Body::from(body.clone()))
            .map_err(ForwardError::transport)?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(ForwardError::transport)?;

        let status = response.status();
        let body = axum::body::to_bytes(Body::new(response.into_body()), MAX_RESPONSE_BYTES)
            .await
            .map_err(ForwardError::transport)?;

        Ok(BackendResponse { status, body })
    }
}
