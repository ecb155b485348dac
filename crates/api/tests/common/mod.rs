//! Shared fixtures for the HTTP integration tests.
//!
//! Every test builds its own router over a fresh `MemStorage`, so tests are
//! isolated and need no database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use domain::models::NewAdminUser;
use domain::{MemStorage, Storage};
use fake::faker::internet::en::Username;
use fake::Fake;
use group_therapy_api::{app::create_app, config::Config};
use serde_json::{json, Value};
use shared::password::hash_password;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemStorage>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::load_for_test(overrides).expect("Failed to load test config")
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(&[])
}

pub fn create_test_app_with(overrides: &[(&str, &str)]) -> TestApp {
    let storage = Arc::new(MemStorage::new());
    let router = create_app(test_config(overrides), storage.clone() as Arc<dyn Storage>);
    TestApp { router, storage }
}

pub fn unique_username() -> String {
    let base: String = Username().fake();
    format!("{}_{}", base, &uuid::Uuid::new_v4().simple().to_string()[..8])
}

/// Creates an admin account directly in storage and returns its username.
pub async fn seed_admin(storage: &MemStorage) -> String {
    let username = unique_username();
    let hash = hash_password(ADMIN_PASSWORD).unwrap();
    storage
        .create_admin_user(NewAdminUser::new(username.clone(), hash))
        .await
        .unwrap();
    username
}

/// Seeds an admin, logs in over HTTP and returns the bearer token.
pub async fn admin_token(app: &TestApp) -> String {
    let username = seed_admin(&app.storage).await;
    let response = app
        .send(json_request(
            Method::POST,
            "/api/admin/login",
            json!({ "username": username, "password": ADMIN_PASSWORD }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    body["accessToken"].as_str().unwrap().to_string()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn json_request_with_auth(method: Method, uri: &str, body: Value, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_request_with_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request_with_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}
