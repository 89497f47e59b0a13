//! Route definitions for the `/scripts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::script;
use crate::state::AppState;

/// Routes mounted at `/scripts`.
///
/// ```text
/// POST   /                          -> create
/// GET    /project/{project_id}      -> list_by_project
/// GET    /{id}                      -> get_by_id (with 10 newest versions)
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/versions             -> list_versions (?limit=)
/// POST   /{id}/lock                 -> lock
/// POST   /{id}/unlock               -> unlock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(script::create))
        .route("/project/{project_id}", get(script::list_by_project))
        .route(
            "/{id}",
            get(script::get_by_id)
                .patch(script::update)
                .delete(script::delete),
        )
        .route("/{id}/versions", get(script::list_versions))
        .route("/{id}/lock", post(script::lock))
        .route("/{id}/unlock", post(script::unlock))
}
