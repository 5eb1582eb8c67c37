//! Fixture generation API handlers.
//!
//! # Examples
//!
//! Generate a knockout bracket:
//! ```bash
//! curl -X POST http://localhost:6969/api/v1/fixtures \
//!   -H "Content-Type: application/json" \
//!   -d '{"tournament_name": "Spring Cup", "format": "knockout", "teams": ["Lions", "Tigers", "Bears"]}'
//! ```

use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tourney_fixtures::fixture::{
    FixtureError, FixtureSet, MatchRecord, RawFixtureRequest, RngShuffler, generate,
};

use super::AppState;
use super::request_id::RequestId;
use crate::{logging, metrics};

/// Successful generation envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct FixturesResponse {
    pub fixtures: Vec<MatchRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

fn reject(request_id: &RequestId, err: &FixtureError) -> ApiError {
    metrics::fixture_rejections_total(err.reason());

    if err.is_validation() {
        logging::log_fixture_rejected(err.reason(), &err.to_string());
        error_response(StatusCode::BAD_REQUEST, err.to_string())
    } else {
        tracing::error!(request_id = %request_id.as_str(), error = %err, "Fixture generation failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

/// Generate fixtures for a tournament.
///
/// # Request Body
///
/// ```json
/// {
///   "tournament_name": "Spring Cup",
///   "format": "round_robin",
///   "teams": ["Lions", "Tigers", "Bears"],
///   "venue": "Riverside"
/// }
/// ```
///
/// `start_date`, `match_duration` and `finals` are accepted with any JSON type
/// and ignored.
///
/// # Response
///
/// Returns `200 OK` with the ordered fixture list:
/// ```json
/// {
///   "fixtures": [
///     {"match": "Lions vs Bye", "venue": "Riverside", "round": 1},
///     {"match": "Tigers vs Bears", "venue": "Riverside", "round": 1}
///   ]
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: undecodable body, missing fields, unsupported format,
///   or a team list outside the configured bounds
/// - `500 Internal Server Error`: generation failed
pub async fn generate_fixtures(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<RawFixtureRequest>, JsonRejection>,
) -> Result<Json<FixturesResponse>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        metrics::fixture_rejections_total("invalid_body");
        logging::log_fixture_rejected("invalid_body", &rejection.body_text());
        error_response(StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let request = state
        .dispatcher
        .prepare(&raw)
        .map_err(|e| reject(&request_id, &e))?;

    let format = request.format;
    let team_count = request.teams.len();
    let seed = state.knockout_seed;
    let started = Instant::now();

    let outcome = tokio::task::spawn_blocking(move || match seed {
        Some(seed) => generate(&request, &mut RngShuffler::seeded(seed)),
        None => generate(&request, &mut RngShuffler::thread()),
    })
    .await;

    let fixtures: FixtureSet = match outcome {
        Ok(result) => result.map_err(|e| reject(&request_id, &e))?,
        Err(join_error) => {
            tracing::error!(
                request_id = %request_id.as_str(),
                error = %join_error,
                "Fixture generation task failed"
            );
            metrics::fixture_rejections_total("internal");
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Fixture generation failed",
            ));
        }
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    logging::log_fixture_generated(format.as_str(), team_count, fixtures.len(), duration_ms);
    logging::log_performance("fixture_generation", duration_ms, Some(format.as_str()));
    metrics::fixtures_generated_total(format.as_str(), fixtures.len());

    Ok(Json(FixturesResponse {
        fixtures: fixtures.to_records(),
    }))
}

/// CORS pre-flight answer for the fixture endpoints
pub async fn preflight() -> &'static str {
    "ok"
}
