//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`, env-filter controlled
//! - Request ID flows through handler spans and the response
//! - Metrics are cheap (atomic increments), exporter optional

pub mod metrics;
