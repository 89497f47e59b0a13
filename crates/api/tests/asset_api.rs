//! Integration tests for `/api/assets`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;
use uwrap_core::types::DbId;

async fn create_asset(pool: &PgPool, project: DbId, name: &str, asset_type: &str) -> DbId {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/assets",
        json!({
            "project_id": project,
            "name": name,
            "type": asset_type,
            "url": format!("https://cdn.example.com/{name}"),
            "size": 2048,
            "mime_type": "application/octet-stream",
            "tags": ["ref"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed(pool: &PgPool) -> DbId {
    let org = common::seed_organization(pool, "assets").await;
    common::seed_project(pool, org, "Moodboard").await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_serializes_type_field(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_asset(&pool, project, "poster.png", "IMAGE").await;

    let json = body_json(get(common::build_test_app(pool), &format!("/api/assets/{id}")).await).await;
    assert_eq!(json["type"], "IMAGE");
    assert_eq!(json["size"], 2048);
    assert_eq!(json["tags"], json!(["ref"]));
    assert_eq!(json["metadata"], json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_unknown_type(pool: PgPool) {
    let project = seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/assets",
        json!({
            "project_id": project,
            "name": "x",
            "type": "HOLOGRAM",
            "url": "https://cdn.example.com/x",
            "mime_type": "text/plain"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn type_filter_returns_only_matching_newest_first(pool: PgPool) {
    let project = seed(&pool).await;
    let first_image = create_asset(&pool, project, "a.png", "IMAGE").await;
    create_asset(&pool, project, "b.mp4", "VIDEO").await;
    let second_image = create_asset(&pool, project, "c.png", "IMAGE").await;

    let uri = format!("/api/assets/project/{project}?type=IMAGE");
    let json = body_json(get(common::build_test_app(pool.clone()), &uri).await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second_image, first_image]);

    let all = body_json(
        get(common::build_test_app(pool), &format!("/api/assets/project/{project}")).await,
    )
    .await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_replaces_tags(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_asset(&pool, project, "clip.mov", "VIDEO").await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/assets/{id}"),
        json!({ "tags": ["b-roll", "day-2"], "description": "Rooftop" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["tags"], json!(["b-roll", "day-2"]));
    assert_eq!(json["description"], "Rooftop");
    assert_eq!(json["name"], "clip.mov");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_with_null_description_clears_it(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_asset(&pool, project, "plate.exr", "IMAGE").await;

    patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/assets/{id}"),
        json!({ "description": "Hero plate" }),
    )
    .await;
    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/assets/{id}"),
        json!({ "description": null }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["description"].is_null());
    assert_eq!(json["tags"], json!(["ref"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_get_is_404(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_asset(&pool, project, "temp.wav", "AUDIO").await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/assets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
