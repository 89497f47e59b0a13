//! Route definitions for the `/assets` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::asset;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// POST   /                          -> create
/// GET    /project/{project_id}      -> list_by_project (?type=)
/// GET    /{id}                      -> get_by_id
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(asset::create))
        .route("/project/{project_id}", get(asset::list_by_project))
        .route(
            "/{id}",
            get(asset::get_by_id)
                .patch(asset::update)
                .delete(asset::delete),
        )
}
