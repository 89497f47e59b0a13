//! Route definitions for the `/projects` resource.
//!
//! Also nests shooting day list/create under `/projects/{project_id}/shooting-days`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{project, shooting_day};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list (?organization_id=)
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PATCH  /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{project_id}/shooting-days        -> list_by_project
/// POST   /{project_id}/shooting-days        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route(
            "/{project_id}/shooting-days",
            get(shooting_day::list_by_project).post(shooting_day::create),
        )
}
