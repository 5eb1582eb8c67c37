//! HTTP API for the fixture server.
//!
//! The API is built with:
//! - **Axum**: Async web framework for HTTP
//! - **Tower**: Middleware for CORS and request ids
//!
//! # Modules
//!
//! - [`fixtures`]: Fixture generation endpoint
//! - [`request_id`]: Request correlation middleware
//!
//! # Endpoints Overview
//!
//! - `POST /api/v1/fixtures` - Generate fixtures
//! - `POST /generate-fixtures` - Same endpoint under its original function path
//! - `OPTIONS` on both paths - CORS pre-flight
//! - `GET /health` - Server health status
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tf_server::api::{create_router, AppState};
//! use std::sync::Arc;
//! use tourney_fixtures::FixtureDispatcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     dispatcher: Arc::new(FixtureDispatcher::default()),
//!     knockout_seed: None,
//! };
//!
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! Browsers call the endpoint directly from the platform's web client, so
//! any origin is allowed and every response carries
//! `Access-Control-Allow-Origin: *`.

pub mod fixtures;
pub mod request_id;

use axum::{
    Router,
    http::{
        HeaderName, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tourney_fixtures::FixtureDispatcher;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request (cheap due to Arc wrappers).
#[derive(Clone)]
pub struct AppState {
    /// Validates requests and generates fixtures
    pub dispatcher: Arc<FixtureDispatcher>,
    /// Fixed seed for knockout draws, for reproducible brackets
    pub knockout_seed: Option<u64>,
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Endpoint Summary
///
/// ```text
/// GET     /health              - Health check
/// POST    /api/v1/fixtures     - Generate fixtures
/// OPTIONS /api/v1/fixtures     - CORS pre-flight
/// POST    /generate-fixtures   - Generate fixtures (original path)
/// OPTIONS /generate-fixtures   - CORS pre-flight
/// ```
pub fn create_router(state: AppState) -> Router {
    let v1_routes = Router::new().route(
        "/fixtures",
        post(fixtures::generate_fixtures).options(fixtures::preflight),
    );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .route(
            "/generate-fixtures",
            post(fixtures::generate_fixtures).options(fixtures::preflight),
        )
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS policy with the headers the web client sends
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Health check endpoint for monitoring and load balancers.
///
/// The engine has no dependencies to probe, so a response means healthy.
///
/// # Example
///
/// ```bash
/// curl http://localhost:6969/health
/// # {"status":"healthy","version":"0.1.0","timestamp":"2026-10-19T10:30:00Z"}
/// ```
async fn health_check() -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
