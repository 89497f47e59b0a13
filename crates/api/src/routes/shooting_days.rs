//! Route definitions for the `/shooting-days` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::shooting_day;
use crate::state::AppState;

/// Routes mounted at `/shooting-days`.
///
/// ```text
/// PATCH  /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        patch(shooting_day::update).delete(shooting_day::delete),
    )
}
