//! Integration tests for HTTP metrics labels.
//!
//! Installs a global Prometheus recorder, so these tests live in their own
//! test binary.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tf_server::api::{AppState, create_router};
use tourney_fixtures::{FixtureDispatcher, FixtureLimits};
use tower::ServiceExt; // For `oneshot` method

fn create_test_server() -> axum::Router {
    let state = AppState {
        dispatcher: Arc::new(FixtureDispatcher::new(FixtureLimits::default())),
        knockout_seed: None,
    };
    create_router(state)
}

fn series<'a>(rendered: &'a str, name: &str) -> Vec<&'a str> {
    let prefix = format!("{name}{{");
    rendered
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .collect()
}

#[tokio::test]
async fn test_http_metrics_are_labelled_by_route() {
    let handle = PrometheusBuilder::new().install_recorder().unwrap();

    for i in 0..20 {
        let request = Request::builder()
            .uri(format!("/scan/{i}"))
            .body(Body::empty())
            .unwrap();
        let response = create_test_server().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/fixtures")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"tournament_name":"Cup","format":"knockout","teams":["A","B"]}"#,
        ))
        .unwrap();
    let response = create_test_server().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rendered = handle.render();
    let requests = series(&rendered, "http_requests_total");

    // Twenty unknown paths collapse into one series
    let unmatched: Vec<_> = requests
        .iter()
        .filter(|line| line.contains(r#"path="unmatched""#))
        .collect();
    assert_eq!(unmatched.len(), 1, "{rendered}");
    assert!(unmatched[0].ends_with(" 20"), "{rendered}");

    assert!(!rendered.contains("/scan/"), "{rendered}");
    assert!(
        requests
            .iter()
            .any(|line| line.contains(r#"path="/api/v1/fixtures""#)),
        "{rendered}"
    );
    assert_eq!(requests.len(), 2, "{rendered}");
}
