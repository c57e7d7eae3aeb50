//! Metrics collection and exposition.
//!
//! # Metrics
//! - `activator_requests_total` (counter): activation requests by status code
//! - `activator_request_duration_seconds` (histogram): end-to-end latency,
//!   receipt wait included

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished activation request.
pub fn record_request(status: u16, start: Instant) {
    let status = status.to_string();
    counter!("activator_requests_total", "status" => status.clone()).increment(1);
    histogram!("activator_request_duration_seconds", "status" => status)
        .record(start.elapsed().as_secs_f64());
}
