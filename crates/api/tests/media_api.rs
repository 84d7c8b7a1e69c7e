//! Integration tests for the media library API.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn image_body(public_id: &str) -> serde_json::Value {
    json!({
        "kind": "image",
        "public_id": public_id,
        "url": format!("https://cdn.example.com/{public_id}.jpg"),
        "width": 1600,
        "height": 900,
        "format": "jpg",
    })
}

// ---------------------------------------------------------------------------
// Test: registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_media_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/api/v1/media", &image_body("uploads/hero")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["kind"], "image");
    assert_eq!(json["data"]["public_id"], "uploads/hero");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_video_with_poster(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "kind": "video",
        "public_id": "uploads/intro",
        "url": "https://cdn.example.com/uploads/intro.mp4",
        "poster_url": "https://cdn.example.com/uploads/intro.jpg",
    });
    let response = post_json(&app, "/api/v1/media", &body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["data"]["poster_url"],
        "https://cdn.example.com/uploads/intro.jpg"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_kind_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "kind": "audio",
        "public_id": "uploads/song",
        "url": "https://cdn.example.com/uploads/song.mp3",
    });
    let response = post_json(&app, "/api/v1/media", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_public_id_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = image_body("uploads/hero");
    post_json(&app, "/api/v1/media", &body).await;

    let response = post_json(&app, "/api/v1/media", &body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Test: listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_media_returns_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(&app, "/api/v1/media", &image_body("uploads/first")).await;
    post_json(&app, "/api/v1/media", &image_body("uploads/second")).await;

    let response = get(&app, "/api/v1/media").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["public_id"], "uploads/second");
}

// ---------------------------------------------------------------------------
// Test: delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_media_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(post_json(&app, "/api/v1/media", &image_body("uploads/hero")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/api/v1/media/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(&app, &format!("/api/v1/media/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
