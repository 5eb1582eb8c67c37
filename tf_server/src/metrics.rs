//! Prometheus metrics for monitoring the fixture server.
//!
//! Metrics are exposed in Prometheus text format for scraping by monitoring
//! systems when an exporter address is configured. Without an installed
//! exporter every recording function is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tf_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::http_requests_total("POST", "/api/v1/fixtures", 200);
//! metrics::fixtures_generated_total("knockout", 7);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
///
/// # Errors
///
/// Returns a message if the exporter cannot be installed.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// `route` must be a route pattern, never a raw request path.
pub fn http_requests_total(method: &str, route: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, route: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => route.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Fixture Metrics
// ============================================================================

/// Count a successful generation and record its size.
pub fn fixtures_generated_total(format: &str, match_count: usize) {
    metrics::counter!("fixtures_generated_total",
        "format" => format.to_string()
    )
    .increment(1);

    metrics::histogram!("fixture_matches",
        "format" => format.to_string()
    )
    .record(match_count as f64);
}

/// Count a rejected request by reason.
pub fn fixture_rejections_total(reason: &str) {
    metrics::counter!("fixture_rejections_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}
