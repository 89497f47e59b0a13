#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use uwrap_api::config::ServerConfig;
use uwrap_api::router::build_app_router;
use uwrap_api::state::AppState;
use uwrap_api::ws::WsManager;
use uwrap_core::types::DbId;
use uwrap_db::models::organization::CreateOrganization;
use uwrap_db::models::project::CreateProject;
use uwrap_db::models::user::CreateUser;
use uwrap_db::repositories::{OrganizationRepo, ProjectRepo, UserRepo};
use uwrap_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application state used by the test router.
pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::new(EventBus::default()),
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(test_state(pool), &test_config())
}

/// Build the router and hand back the state so tests can observe the
/// WebSocket manager and event bus.
pub fn build_test_app_with_state(pool: PgPool) -> (Router, AppState) {
    let state = test_state(pool);
    (build_app_router(state.clone(), &test_config()), state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub async fn seed_organization(pool: &PgPool, slug: &str) -> DbId {
    let input = CreateOrganization {
        name: format!("Org {slug}"),
        slug: slug.to_string(),
        logo: None,
        settings: None,
    };
    OrganizationRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_user(pool: &PgPool, email: &str, name: &str) -> DbId {
    let input = CreateUser {
        email: email.to_string(),
        name: Some(name.to_string()),
        image: None,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_project(pool: &PgPool, organization_id: DbId, name: &str) -> DbId {
    let input = CreateProject {
        organization_id,
        name: name.to_string(),
        description: None,
        status: None,
        cover_image: None,
        start_date: None,
        end_date: None,
        created_by_id: None,
    };
    ProjectRepo::create(pool, &input).await.unwrap().id
}
