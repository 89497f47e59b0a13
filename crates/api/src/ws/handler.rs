use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use uwrap_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::ws::manager::WsManager;
use crate::ws::protocol::{
    error_frame, frame, ClientMessage, SubscriptionAck, SUBSCRIBE_PROJECT, UNSUBSCRIBE_PROJECT,
};
use crate::ws::rooms::Room;

/// Connection-time query parameters.
///
/// `user_id` is taken as text so a malformed value gets the JSON error
/// envelope instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct ConnectParams {
    pub user_id: Option<String>,
}

/// Parse the optional `user_id` query value. Blank means anonymous.
fn parse_user_id(raw: Option<&str>) -> AppResult<Option<DbId>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value.parse::<DbId>().map(Some).map_err(|_| {
            AppError::BadRequest(format!("user_id must be an integer, got '{value}'"))
        }),
    }
}

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection is registered with `WsManager`, joined
/// to its user room when `user_id` is given, and managed by a sender task
/// plus the inbound loop. A non-numeric `user_id` is rejected with 400.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<ConnectParams>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let user_id = parse_user_id(params.user_id.as_deref())?;
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state.ws_manager, user_id)))
}

async fn handle_socket(socket: WebSocket, ws_manager: Arc<WsManager>, user_id: Option<DbId>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, user_id = ?user_id, "WebSocket connected");

    let mut rx = ws_manager.add(conn_id.clone(), user_id).await;

    let (mut sink, mut stream) = socket.split();

    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(Message::Text(text)) => {
                handle_text(&ws_manager, &conn_id, text.as_str()).await;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    let session_secs = ws_manager
        .remove(&conn_id)
        .await
        .map(|conn| (chrono::Utc::now() - conn.connected_at).num_seconds());
    send_task.abort();
    tracing::info!(conn_id = %conn_id, session_secs = ?session_secs, "WebSocket disconnected");
}

/// Dispatch one inbound text frame and reply on the same connection.
pub async fn handle_text(ws_manager: &WsManager, conn_id: &str, text: &str) {
    let reply = match ClientMessage::parse(text) {
        Ok(ClientMessage::SubscribeProject(id)) => {
            ws_manager.join(conn_id, Room::Project(id.0)).await;
            tracing::debug!(conn_id, project_id = id.0, "Subscribed to project");
            frame(SUBSCRIBE_PROJECT, &SubscriptionAck::subscribed(id.0))
        }
        Ok(ClientMessage::UnsubscribeProject(id)) => {
            ws_manager.leave(conn_id, Room::Project(id.0)).await;
            tracing::debug!(conn_id, project_id = id.0, "Unsubscribed from project");
            frame(UNSUBSCRIBE_PROJECT, &SubscriptionAck::unsubscribed(id.0))
        }
        Err(e) => {
            tracing::debug!(conn_id, error = %e, "Malformed WebSocket frame");
            Ok(error_frame(&format!("Invalid message: {e}")))
        }
    };

    match reply {
        Ok(msg) => {
            ws_manager.send_to(conn_id, msg).await;
        }
        Err(e) => tracing::error!(conn_id, error = %e, "Failed to encode WebSocket reply"),
    }
}
