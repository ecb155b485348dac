//! Public reads and admin writes for label content.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_token, create_test_app, delete_request_with_auth, get_request, json_request,
    json_request_with_auth, parse_response_body,
};
use serde_json::{json, Value};

async fn create(app: &common::TestApp, token: &str, uri: &str, body: Value) -> Value {
    let response = app
        .send(json_request_with_auth(Method::POST, uri, body, token))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {}", uri);
    parse_response_body(response).await
}

#[tokio::test]
async fn test_writes_require_admin_token() {
    let app = create_test_app();

    let cases = [
        ("/api/artists", json!({ "name": "Above & Beyond" })),
        ("/api/releases", json!({ "title": "Sun & Moon", "artistName": "A&B" })),
        (
            "/api/events",
            json!({ "title": "ABGT 600", "venue": "The Gorge", "city": "George", "date": "2026-09-01T19:00:00Z" }),
        ),
        ("/api/posts", json!({ "title": "News", "slug": "news", "content": "Body" })),
        ("/api/radio-shows", json!({ "title": "Group Therapy", "hostName": "A&B" })),
        ("/api/playlists", json!({ "title": "Deep" })),
        ("/api/videos", json!({ "title": "Live", "videoUrl": "https://youtube.com/watch?v=a" })),
    ];

    for (uri, body) in cases {
        let response = app.send(json_request(Method::POST, uri, body)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "POST {}", uri);
    }

    let response = app.send(get_request("/api/contacts")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_release_lifecycle() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    let release = create(
        &app,
        &token,
        "/api/releases",
        json!({
            "title": "Sun & Moon",
            "artistName": "Above & Beyond",
            "releaseType": "album",
            "spotifyUrl": "https://open.spotify.com/album/1"
        }),
    )
    .await;
    assert_eq!(release["releaseType"], "album");
    assert_eq!(release["published"], true);
    assert_eq!(release["featured"], false);
    let id = release["id"].as_str().unwrap().to_string();

    let response = app.send(get_request(&format!("/api/releases/{}", id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["title"], "Sun & Moon");

    let response = app
        .send(json_request_with_auth(
            Method::PATCH,
            &format!("/api/releases/{}", id),
            json!({ "featured": true }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_response_body(response).await;
    assert_eq!(updated["featured"], true);
    assert_eq!(updated["title"], "Sun & Moon");
    assert_eq!(updated["spotifyUrl"], "https://open.spotify.com/album/1");

    let response = app
        .send(delete_request_with_auth(&format!("/api/releases/{}", id), &token))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.send(get_request(&format!("/api/releases/{}", id))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .send(delete_request_with_auth(&format!("/api/releases/{}", id), &token))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_releases_listed_newest_first() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    for title in ["First", "Second", "Third"] {
        create(
            &app,
            &token,
            "/api/releases",
            json!({ "title": title, "artistName": "A&B" }),
        )
        .await;
    }

    let response = app.send(get_request("/api/releases")).await;
    let list = parse_response_body(response).await;
    let titles: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    let response = app
        .send(json_request_with_auth(
            Method::PATCH,
            &format!("/api/playlists/{}", uuid::Uuid::new_v4()),
            json!({ "trackCount": 3 }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_response_body(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_events_sorted_by_date() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    for (title, date) in [
        ("Later", "2026-12-31T22:00:00Z"),
        ("Sooner", "2026-06-01T20:00:00Z"),
    ] {
        create(
            &app,
            &token,
            "/api/events",
            json!({ "title": title, "venue": "Venue", "city": "London", "date": date }),
        )
        .await;
    }

    let list = parse_response_body(app.send(get_request("/api/events")).await).await;
    assert_eq!(list[0]["title"], "Sooner");
    assert_eq!(list[1]["title"], "Later");
}

#[tokio::test]
async fn test_event_end_before_start_rejected() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    let response = app
        .send(json_request_with_auth(
            Method::POST,
            "/api/events",
            json!({
                "title": "ABGT",
                "venue": "Venue",
                "city": "London",
                "date": "2026-06-01T20:00:00Z",
                "endDate": "2026-06-01T19:00:00Z"
            }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let event = create(
        &app,
        &token,
        "/api/events",
        json!({ "title": "ABGT", "venue": "Venue", "city": "London", "date": "2026-06-01T20:00:00Z" }),
    )
    .await;

    // The stored start date is checked against a new end date.
    let response = app
        .send(json_request_with_auth(
            Method::PATCH,
            &format!("/api/events/{}", event["id"].as_str().unwrap()),
            json!({ "endDate": "2026-05-01T00:00:00Z" }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_artist_slug_derived_and_unique() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    let artist = create(
        &app,
        &token,
        "/api/artists",
        json!({ "name": "Above & Beyond" }),
    )
    .await;
    assert_eq!(artist["slug"], "above-beyond");

    let response = app
        .send(json_request_with_auth(
            Method::POST,
            "/api/artists",
            json!({ "name": "Above and Beyond", "slug": "above-beyond" }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(parse_response_body(response).await["error"], "conflict");

    let response = app
        .send(json_request_with_auth(
            Method::POST,
            "/api/artists",
            json!({ "name": "!!!" }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_slug_conflict_on_update() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    create(
        &app,
        &token,
        "/api/posts",
        json!({ "title": "One", "slug": "one", "content": "First" }),
    )
    .await;
    let second = create(
        &app,
        &token,
        "/api/posts",
        json!({ "title": "Two", "slug": "two", "content": "Second" }),
    )
    .await;

    let response = app
        .send(json_request_with_auth(
            Method::PATCH,
            &format!("/api/posts/{}", second["id"].as_str().unwrap()),
            json!({ "slug": "one" }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_radio_shows_ordered_by_schedule() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    for (title, day, time) in [
        ("Unscheduled", Value::Null, Value::Null),
        ("Friday late", json!(5), json!("22:00")),
        ("Monday", json!(1), json!("18:00")),
        ("Friday early", json!(5), json!("19:00")),
    ] {
        create(
            &app,
            &token,
            "/api/radio-shows",
            json!({ "title": title, "hostName": "A&B", "dayOfWeek": day, "startTime": time }),
        )
        .await;
    }

    let list = parse_response_body(app.send(get_request("/api/radio-shows")).await).await;
    let titles: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Monday", "Friday early", "Friday late", "Unscheduled"]);
    assert_eq!(list[0]["durationMinutes"], 60);
}

#[tokio::test]
async fn test_validation_errors_are_400() {
    let app = create_test_app();
    let token = admin_token(&app).await;

    let response = app
        .send(json_request_with_auth(
            Method::POST,
            "/api/videos",
            json!({ "title": "Live", "videoUrl": "ftp://example.com/video" }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("video_url"));

    let response = app
        .send(json_request_with_auth(
            Method::POST,
            "/api/playlists",
            json!({ "title": "Deep", "trackCount": -4 }),
            &token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_id_rejected() {
    let app = create_test_app();
    let response = app.send(get_request("/api/videos/not-a-uuid")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
