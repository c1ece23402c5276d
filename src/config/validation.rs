//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the backend endpoint is a usable absolute URL
//! - Check the auth key is present for the default validator
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No backend endpoint in either the config file or the environment
    /// fallback chain. Starting without one would produce malformed
    /// outbound URLs, so it is a startup-time failure.
    #[error("backend endpoint is not configured (set backend.endpoint or one of INTERNAL_APP_SERVER_URL / APP_SERVER_URL)")]
    MissingBackendEndpoint,

    /// Backend endpoint is not an absolute http(s) URL.
    #[error("backend endpoint {0:?} is not a valid http(s) URL")]
    InvalidBackendEndpoint(String),

    /// Auth key missing while the bearer-key validator is in use.
    #[error("auth.bearer_key must be non-empty")]
    EmptyBearerKey,

    /// Listener bind address does not parse as a socket address.
    #[error("listener bind address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),
}

/// Validate a fully resolved configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backend.endpoint.is_empty() {
        errors.push(ValidationError::MissingBackendEndpoint);
    } else {
        match Url::parse(&config.backend.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => errors.push(ValidationError::InvalidBackendEndpoint(
                config.backend.endpoint.clone(),
            )),
        }
    }

    if config.auth.bearer_key.is_empty() {
        errors.push(ValidationError::EmptyBearerKey);
    }

    if config
        .listener
        .bind_address
        .parse::<std::net::SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.backend.endpoint = "http://127.0.0.1:5000".to_string();
        config.auth.bearer_key = "secret".to_string();
        config
    }

    #[test]
    fn accepts_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn rejects_missing_endpoint() {
        let mut config = valid_config();
        config.backend.endpoint.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::MissingBackendEndpoint));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut config = valid_config();
        config.backend.endpoint = "app-server:5000".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBackendEndpoint(
                "app-server:5000".to_string()
            )]
        );
    }

    #[test]
    fn collects_all_errors() {
        let config = GatewayConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::MissingBackendEndpoint));
        assert!(errors.contains(&ValidationError::EmptyBearerKey));
    }
}
