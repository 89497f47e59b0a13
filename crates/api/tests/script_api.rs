//! Integration tests for `/api/scripts`: versioning on content edits and
//! the advisory lock.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;
use uwrap_core::types::DbId;

async fn create_script(pool: &PgPool, project: DbId, title: &str, content: &str) -> DbId {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/scripts",
        json!({ "project_id": project, "title": title, "content": content }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn seed(pool: &PgPool) -> DbId {
    let org = common::seed_organization(pool, "scripts").await;
    common::seed_project(pool, org, "Scripted").await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_script_starts_unlocked_at_version_one(pool: PgPool) {
    let project = seed(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/scripts",
        json!({ "project_id": project, "title": "Opening" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["version"], 1);
    assert_eq!(json["content"], "");
    assert_eq!(json["is_locked"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn two_content_updates_bump_version_by_two(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_script(&pool, project, "Draft", "v1 text").await;
    let uri = format!("/api/scripts/{id}");

    let app = common::build_test_app(pool.clone());
    let first = patch_json(app, &uri, json!({ "content": "v2 text" })).await;
    assert_eq!(body_json(first).await["version"], 2);

    let app = common::build_test_app(pool.clone());
    let second = patch_json(
        app,
        &uri,
        json!({ "content": "v3 text", "title": "Final", "change_description": "polish" }),
    )
    .await;
    let json = body_json(second).await;
    assert_eq!(json["version"], 3);
    assert_eq!(json["content"], "v3 text");
    assert_eq!(json["title"], "Final");

    let versions = body_json(
        get(common::build_test_app(pool), &format!("/api/scripts/{id}/versions")).await,
    )
    .await;
    let versions = versions.as_array().unwrap();
    assert_eq!(versions.len(), 2);
    // Newest snapshot first; each holds the state before its update.
    assert_eq!(versions[0]["version"], 2);
    assert_eq!(versions[0]["content"], "v2 text");
    assert_eq!(versions[0]["title"], "Draft");
    assert_eq!(versions[0]["change_description"], "polish");
    assert_eq!(versions[1]["version"], 1);
    assert_eq!(versions[1]["content"], "v1 text");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn title_only_update_keeps_version(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_script(&pool, project, "Draft", "body").await;

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/scripts/{id}"),
        json!({ "title": "Renamed" }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["version"], 1);
    assert_eq!(json["title"], "Renamed");

    let detail = body_json(get(common::build_test_app(pool), &format!("/api/scripts/{id}")).await).await;
    assert_eq!(detail["versions"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_content_clears_without_new_version(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_script(&pool, project, "Draft", "keep").await;

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/scripts/{id}"),
        json!({ "content": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["version"], 1);
    assert_eq!(json["content"], "");

    let versions = body_json(
        get(common::build_test_app(pool), &format!("/api/scripts/{id}/versions")).await,
    )
    .await;
    assert_eq!(versions.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_script_is_404(pool: PgPool) {
    let response = patch_json(
        common::build_test_app(pool),
        "/api/scripts/4040",
        json!({ "content": "x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_returns_at_most_ten_versions(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_script(&pool, project, "Long", "0").await;
    for n in 1..=12 {
        let app = common::build_test_app(pool.clone());
        patch_json(app, &format!("/api/scripts/{id}"), json!({ "content": n.to_string() })).await;
    }

    let detail = body_json(get(common::build_test_app(pool), &format!("/api/scripts/{id}")).await).await;
    assert_eq!(detail["version"], 13);
    let versions = detail["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 10);
    assert_eq!(versions[0]["version"], 12);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_lock_wins(pool: PgPool) {
    let project = seed(&pool).await;
    let alice = common::seed_user(&pool, "alice@example.com", "Alice").await;
    let bob = common::seed_user(&pool, "bob@example.com", "Bob").await;
    let id = create_script(&pool, project, "Shared", "").await;
    let uri = format!("/api/scripts/{id}/lock");

    let first = post_json(common::build_test_app(pool.clone()), &uri, json!({ "user_id": alice })).await;
    assert_eq!(body_json(first).await["locked_by_id"], alice);

    let second = post_json(common::build_test_app(pool.clone()), &uri, json!({ "user_id": bob })).await;
    let json = body_json(second).await;
    assert_eq!(json["is_locked"], true);
    assert_eq!(json["locked_by_id"], bob);
    assert!(json["locked_at"].is_string());

    let listed = body_json(
        get(common::build_test_app(pool), &format!("/api/scripts/project/{project}")).await,
    )
    .await;
    assert_eq!(listed[0]["locked_by_name"], "Bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlock_clears_lock_fields(pool: PgPool) {
    let project = seed(&pool).await;
    let alice = common::seed_user(&pool, "alice@example.com", "Alice").await;
    let id = create_script(&pool, project, "Shared", "").await;

    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/scripts/{id}/lock"),
        json!({ "user_id": alice }),
    )
    .await;
    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/scripts/{id}/unlock"),
        json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_locked"], false);
    assert!(json["locked_by_id"].is_null());
    assert!(json["locked_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_project_is_newest_updated_first(pool: PgPool) {
    let project = seed(&pool).await;
    let older = create_script(&pool, project, "Older", "").await;
    create_script(&pool, project, "Newer", "").await;

    patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/scripts/{older}"),
        json!({ "title": "Older, touched" }),
    )
    .await;

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/scripts/project/{project}")).await,
    )
    .await;
    assert_eq!(json[0]["title"], "Older, touched");
    assert_eq!(json[1]["title"], "Newer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_script(pool: PgPool) {
    let project = seed(&pool).await;
    let id = create_script(&pool, project, "Gone", "").await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/scripts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/scripts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
