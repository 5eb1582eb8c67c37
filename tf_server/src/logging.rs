//! Structured logging configuration.
//!
//! This module provides structured logging with request correlation and
//! fixture generation events.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use tf_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn,hyper=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a completed fixture generation
///
/// # Arguments
///
/// * `format` - Tournament format wire name
/// * `team_count` - Teams in the request
/// * `match_count` - Matches produced
/// * `duration_ms` - Generation time in milliseconds
pub fn log_fixture_generated(format: &str, team_count: usize, match_count: usize, duration_ms: u64) {
    tracing::info!(
        format = format,
        team_count = team_count,
        match_count = match_count,
        duration_ms = duration_ms,
        "Fixtures generated"
    );
}

/// Log a rejected fixture request
pub fn log_fixture_rejected(reason: &str, message: &str) {
    tracing::warn!(reason = reason, "Fixture request rejected: {}", message);
}

/// Log performance metric
///
/// Operations slower than a second are logged at warn level.
///
/// # Example
///
/// ```
/// use tf_server::logging::log_performance;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... do work ...
/// let duration = start.elapsed().as_millis() as u64;
/// log_performance("fixture_generation", duration, Some("round_robin"));
/// ```
pub fn log_performance(operation: &str, duration_ms: u64, metadata: Option<&str>) {
    if duration_ms > 1000 {
        tracing::warn!(
            operation = operation,
            duration_ms = duration_ms,
            metadata = metadata,
            "PERFORMANCE: Slow operation"
        );
    } else {
        tracing::debug!(
            operation = operation,
            duration_ms = duration_ms,
            metadata = metadata,
            "Performance metric"
        );
    }
}

/// Log API request/response
///
/// # Arguments
///
/// * `request_id` - Correlation id of the request
/// * `method` - HTTP method
/// * `path` - Request path
/// * `status_code` - Response status code
/// * `duration_ms` - Request duration in milliseconds
pub fn log_api_request(
    request_id: &str,
    method: &str,
    path: &str,
    status_code: u16,
    duration_ms: u64,
) {
    tracing::info!(
        request_id = request_id,
        http_method = method,
        http_path = path,
        http_status = status_code,
        duration_ms = duration_ms,
        "API request completed"
    );
}
