//! Fixture generation server.
//!
//! Serves the round-robin and knockout fixture engine over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use pico_args::Arguments;
use tf_server::{
    api,
    config::{ConfigOverrides, ServerConfig},
    logging, metrics,
};
use tourney_fixtures::FixtureDispatcher;

const HELP: &str = "\
Run the tournament fixture generation server

USAGE:
  tf_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:6969]
  --max-teams  N           Largest accepted team list  [default: env FIXTURE_MAX_TEAMS or 256]
  --seed       N           Fixed seed for knockout draws [default: env FIXTURE_KNOCKOUT_SEED or random]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  FIXTURE_MIN_TEAMS        Smallest accepted team list (default: 2)
  FIXTURE_MAX_TEAMS        Largest accepted team list (default: 256)
  FIXTURE_KNOCKOUT_SEED    Seed for reproducible knockout brackets
  METRICS_BIND             Prometheus exporter address (disabled when unset)
  RUST_LOG                 Log filter (default: info)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ConfigOverrides {
        bind: pargs.opt_value_from_str::<_, SocketAddr>("--bind")?,
        max_teams: pargs.opt_value_from_str("--max-teams")?,
        knockout_seed: pargs.opt_value_from_str("--seed")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", remaining);
    }

    logging::init();

    let config = ServerConfig::from_env(overrides)?;
    config.validate()?;

    tracing::info!(
        bind = %config.bind,
        min_teams = config.limits.min_teams,
        max_teams = config.limits.max_teams,
        seeded = config.knockout_seed.is_some(),
        "Starting fixture server"
    );

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!("Prometheus metrics exported at http://{}/metrics", metrics_bind);
    }

    let state = api::AppState {
        dispatcher: Arc::new(FixtureDispatcher::new(config.limits)),
        knockout_seed: config.knockout_seed,
    };

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    tracing::info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
