//! Route definitions for user notifications.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST   /                              -> create
/// POST   /{id}/read                     -> mark_read
/// GET    /user/{user_id}                -> list_for_user (?unread_only=&limit=&offset=)
/// GET    /user/{user_id}/unread-count   -> unread_count
/// POST   /user/{user_id}/read-all       -> mark_all_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notification::create))
        .route("/{id}/read", post(notification::mark_read))
        .route("/user/{user_id}", get(notification::list_for_user))
        .route("/user/{user_id}/unread-count", get(notification::unread_count))
        .route("/user/{user_id}/read-all", post(notification::mark_all_read))
}
