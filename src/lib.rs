//! Authenticated gateway for OAuth integration connections.
//!
//! Accepts `POST /settings/integrations/connect/oauth`, authenticates the
//! caller, forwards the connection payload to the internal integration
//! service, and translates the backend's answer into the client contract
//! (pass-through on success, `{"error": ...}` with status 500 on any
//! failure).

pub mod config;
pub mod http;
pub mod observability;
pub mod proxy;

pub use config::GatewayConfig;
pub use http::HttpServer;
