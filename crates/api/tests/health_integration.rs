//! Health, metrics and response-header tests.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, create_test_app_with, get_request, parse_response_body};

#[tokio::test]
async fn test_health_check_reports_storage() {
    let app = create_test_app();

    let response = app.send(get_request("/api/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["database"]["connected"], true);
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    let app = create_test_app();

    let response = app.send(get_request("/api/health/live")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "alive");

    let response = app.send(get_request("/api/health/ready")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "ready");
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = create_test_app();

    let response = app.send(get_request("/api/health/live")).await;
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-xss-protection"], "1; mode=block");
    assert!(headers.get("strict-transport-security").is_none());
    assert!(headers.get("x-request-id").is_some());
}

#[tokio::test]
async fn test_hsts_when_enabled() {
    let app = create_test_app_with(&[("security.hsts_enabled", "true")]);

    let response = app.send(get_request("/api/health/live")).await;
    assert_eq!(
        response.headers()["strict-transport-security"],
        "max-age=31536000; includeSubDomains"
    );
}

#[tokio::test]
async fn test_metrics_endpoint_renders_prometheus_text() {
    group_therapy_api::middleware::init_metrics().unwrap();
    let app = create_test_app();

    app.send(get_request("/api/health/live")).await;
    let response = app.send(get_request("/metrics")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();
    let response = app.send(get_request("/api/does-not-exist")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
