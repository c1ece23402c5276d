//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): connect requests by client status
//! - `gateway_request_duration_seconds` (histogram): latency distribution

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to install is logged, not fatal: the gateway keeps serving
/// without metrics exposition.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed connect request.
pub fn record_request(status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!("gateway_requests_total", "status" => status.clone()).increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "status" => status)
        .record(start.elapsed().as_secs_f64());
}
