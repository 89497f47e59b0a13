use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};
use uwrap_core::notification::USER_EVENT_NAME;
use uwrap_core::types::{DbId, Timestamp};

use crate::ws::protocol::event_frame;
use crate::ws::rooms::{Room, RoomRegistry};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket connection.
pub struct WsConnection {
    /// User id supplied at connect time, if any.
    pub user_id: Option<DbId>,
    /// Channel sender for outbound messages to this connection.
    pub sender: WsSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Manages all active WebSocket connections and their room memberships.
///
/// Thread-safe via interior `RwLock`s; designed to be wrapped in `Arc` and
/// shared across the application. The two locks are never held at once.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
    rooms: RwLock<RoomRegistry>,
}

impl WsManager {
    /// Create a new, empty connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            rooms: RwLock::new(RoomRegistry::new()),
        }
    }

    /// Register a new connection, joining its user room when `user_id` is set.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn add(
        &self,
        conn_id: String,
        user_id: Option<DbId>,
    ) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            user_id,
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        if let Some(user_id) = user_id {
            self.rooms.write().await.join(Room::User(user_id), &conn_id);
        }
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    /// Remove a connection by its ID and drop it from every room.
    ///
    /// Returns the removed connection, or `None` if it was already gone.
    pub async fn remove(&self, conn_id: &str) -> Option<WsConnection> {
        let removed = self.connections.write().await.remove(conn_id);
        self.rooms.write().await.leave_all(conn_id);
        removed
    }

    /// Add a connection to a room. Unknown connections are ignored.
    pub async fn join(&self, conn_id: &str, room: Room) -> bool {
        if !self.connections.read().await.contains_key(conn_id) {
            return false;
        }
        self.rooms.write().await.join(room, conn_id);
        true
    }

    /// Remove a connection from a room.
    pub async fn leave(&self, conn_id: &str, room: Room) -> bool {
        self.rooms.write().await.leave(room, conn_id)
    }

    /// Whether a connection is currently in a room.
    pub async fn is_member(&self, conn_id: &str, room: Room) -> bool {
        self.rooms.read().await.is_member(room, conn_id)
    }

    /// Send a message to a single connection. Returns `false` if it is gone.
    pub async fn send_to(&self, conn_id: &str, message: Message) -> bool {
        match self.connections.read().await.get(conn_id) {
            Some(conn) => conn.sender.send(message).is_ok(),
            None => false,
        }
    }

    /// Send a message to every connection in a room.
    ///
    /// Returns the number of connections the message was handed to.
    pub async fn emit_to_room(&self, room: Room, message: Message) -> usize {
        let members = self.rooms.read().await.members(room);
        if members.is_empty() {
            return 0;
        }
        let conns = self.connections.read().await;
        let mut count = 0;
        for conn_id in &members {
            if let Some(conn) = conns.get(conn_id) {
                if conn.sender.send(message.clone()).is_ok() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Emit a `notification` event to the `user:{id}` room.
    pub async fn notify_user(&self, user_id: DbId, payload: &serde_json::Value) -> usize {
        let delivered = self
            .emit_to_room(Room::User(user_id), event_frame(USER_EVENT_NAME, payload))
            .await;
        tracing::debug!(user_id, delivered, "User notification emitted");
        delivered
    }

    /// Emit a named event to the `project:{id}` room.
    pub async fn notify_project(
        &self,
        project_id: DbId,
        event: &str,
        payload: &serde_json::Value,
    ) -> usize {
        let delivered = self
            .emit_to_room(Room::Project(project_id), event_frame(event, payload))
            .await;
        tracing::debug!(project_id, event, delivered, "Project event emitted");
        delivered
    }

    /// Return the current number of active connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Return the number of non-empty rooms.
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.room_count()
    }

    /// Send a Close frame to every connection, then clear connections and rooms.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        drop(conns);
        *self.rooms.write().await = RoomRegistry::new();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connected client.
    pub async fn ping_all(&self) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
