//! Backend endpoint resolution from the environment.
//!
//! The backend base address comes from an ordered fallback chain of
//! environment variables; the first one that is set and non-empty wins.
//! Resolution happens once at startup, never at request time.

use crate::config::schema::GatewayConfig;

/// Fallback chain for the backend integration service address, highest
/// precedence first.
pub const BACKEND_ENDPOINT_VARS: [&str; 2] = ["INTERNAL_APP_SERVER_URL", "APP_SERVER_URL"];

/// Fill config fields from the process environment.
///
/// An endpoint set explicitly in the config file takes precedence over the
/// environment chain.
pub fn apply_env(config: &mut GatewayConfig) {
    if config.backend.endpoint.is_empty() {
        if let Some(endpoint) = resolve_with(|name| std::env::var(name).ok()) {
            config.backend.endpoint = endpoint;
        }
    }
}

/// Walk the fallback chain against a lookup function.
///
/// Split out from [`apply_env`] so the precedence order is testable without
/// mutating process-wide environment state.
pub fn resolve_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    BACKEND_ENDPOINT_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}
