//! Admin login, lockout and token enforcement.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, create_test_app_with, get_request, get_request_with_auth, json_request,
    json_request_with_auth, parse_response_body, seed_admin, ADMIN_PASSWORD,
};
use domain::Storage;
use serde_json::json;

fn login_request(username: &str, password: &str) -> axum::http::Request<axum::body::Body> {
    json_request(
        Method::POST,
        "/api/admin/login",
        json!({ "username": username, "password": password }),
    )
}

#[tokio::test]
async fn test_login_success() {
    let app = create_test_app();
    let username = seed_admin(&app.storage).await;

    let response = app.send(login_request(&username, ADMIN_PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert!(body["accessToken"].as_str().is_some());
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 3600);
    assert_eq!(body["admin"]["username"], username.as_str());
    assert_eq!(body["admin"]["role"], "admin");
    assert!(body["admin"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_records_forwarded_ip() {
    let app = create_test_app();
    let username = seed_admin(&app.storage).await;

    let mut request = login_request(&username, ADMIN_PASSWORD);
    request
        .headers_mut()
        .insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let attempts = app
        .storage
        .get_recent_login_attempts(&username, 15)
        .await
        .unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].ip_address.as_deref(), Some("203.0.113.7"));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let app = create_test_app();
    let username = seed_admin(&app.storage).await;

    let wrong_password = app.send(login_request(&username, "nope")).await;
    let unknown_user = app.send(login_request("nobody", ADMIN_PASSWORD)).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        parse_response_body(wrong_password).await,
        parse_response_body(unknown_user).await
    );
}

#[tokio::test]
async fn test_login_validation() {
    let app = create_test_app();
    let response = app.send(login_request("", "")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(response).await["error"], "validation_error");
}

#[tokio::test]
async fn test_lockout_after_failed_attempts() {
    let app = create_test_app_with(&[("security.max_login_attempts", "2")]);
    let username = seed_admin(&app.storage).await;

    for _ in 0..2 {
        let response = app.send(login_request(&username, "nope")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = app.send(login_request(&username, ADMIN_PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(parse_response_body(response).await["error"], "rate_limited");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = create_test_app();

    let response = app.send(get_request("/api/admin/me")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_response_body(response).await["error"], "unauthorized");

    let response = app
        .send(get_request_with_auth("/api/admin/me", "not-a-jwt"))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_token_identity() {
    let app = create_test_app();
    let username = seed_admin(&app.storage).await;

    let response = app.send(login_request(&username, ADMIN_PASSWORD)).await;
    let body = parse_response_body(response).await;
    let token = body["accessToken"].as_str().unwrap();

    let response = app.send(get_request_with_auth("/api/admin/me", token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let me = parse_response_body(response).await;
    assert_eq!(me["username"], username.as_str());
    assert_eq!(me["id"], body["admin"]["id"]);
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = create_test_app();
    let other = create_test_app_with(&[(
        "jwt.secret",
        "a-completely-different-secret-of-32-bytes",
    )]);
    let username = seed_admin(&other.storage).await;

    let response = other.send(login_request(&username, ADMIN_PASSWORD)).await;
    let token = parse_response_body(response).await["accessToken"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .send(json_request_with_auth(
            Method::POST,
            "/api/videos",
            json!({ "title": "Live", "videoUrl": "https://youtube.com/watch?v=a" }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
