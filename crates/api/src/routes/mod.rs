pub mod assets;
pub mod health;
pub mod notification;
pub mod organizations;
pub mod project;
pub mod scripts;
pub mod shooting_days;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws/notifications?user_id=                       WebSocket gateway
/// /health                                          health
///
/// /organizations                                   list, create
/// /organizations/{id}                              get
///
/// /users                                           create
/// /users/{id}                                      get
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{project_id}/shooting-days             list, create
///
/// /shooting-days/{id}                              update, delete
///
/// /scripts                                         create
/// /scripts/project/{project_id}                    list
/// /scripts/{id}                                    get, update, delete
/// /scripts/{id}/versions                           list versions
/// /scripts/{id}/lock                               lock (POST)
/// /scripts/{id}/unlock                             unlock (POST)
///
/// /assets                                          create
/// /assets/project/{project_id}?type=               list
/// /assets/{id}                                     get, update, delete
///
/// /notifications                                   create
/// /notifications/{id}/read                         mark read (POST)
/// /notifications/user/{user_id}                    list
/// /notifications/user/{user_id}/unread-count       unread count
/// /notifications/user/{user_id}/read-all           mark all read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws/notifications", get(ws::ws_handler))
        .merge(health::api_router())
        .nest("/organizations", organizations::router())
        .nest("/users", users::router())
        .nest("/projects", project::router())
        .nest("/shooting-days", shooting_days::router())
        .nest("/scripts", scripts::router())
        .nest("/assets", assets::router())
        .nest("/notifications", notification::router())
}
