//! HTTP server setup and the connect endpoint.
//!
//! # Responsibilities
//! - Create Axum Router with the gated connect route
//! - Wire up middleware (tracing, timeout, request ID, auth)
//! - Bind server to listener, serve with graceful shutdown
//! - Translate forwarder results into the client contract

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::middleware::auth::{self, AuthContext, AuthValidator, BearerKeyValidator};
use crate::http::request::UuidRequestId;
use crate::observability::metrics;
use crate::proxy::{translator, ProxyForwarder};

/// Inbound route of the connect operation.
pub const CONNECT_OAUTH_ROUTE: &str = "/settings/integrations/connect/oauth";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: ProxyForwarder,
    pub validator: Arc<dyn AuthValidator>,
}

/// HTTP server for the integration gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given (validated) configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        let forwarder = ProxyForwarder::new(client, config.backend.endpoint.clone());
        let validator: Arc<dyn AuthValidator> =
            Arc::new(BearerKeyValidator::new(config.auth.bearer_key.clone()));

        let state = AppState {
            forwarder,
            validator,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let auth_gate = middleware::from_fn_with_state(state.clone(), auth::auth_middleware);

        Router::new()
            .route(CONNECT_OAUTH_ROUTE, post(connect_oauth).layer(auth_gate))
            .route("/health", get(health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend_endpoint = %self.config.backend.endpoint,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Connect endpoint handler.
///
/// Runs behind the auth gate, so the [`AuthContext`] extension is always
/// present. Exactly one backend call is made per request; the combined
/// result is matched here, success passing the backend body through and any
/// failure collapsing to the uniform 500 envelope.
async fn connect_oauth(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    body: Bytes,
) -> Response {
    let start = Instant::now();

    let result = match state.forwarder.forward(&body, &auth).await {
        Ok(backend) => translator::translate(backend),
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => {
            metrics::record_request(StatusCode::OK.as_u16(), start);
            (StatusCode::OK, Json(value)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "API Error in /settings/integrations/connect/oauth:");
            metrics::record_request(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), start);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Liveness probe.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        // Without a signal handler the server simply runs until killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
