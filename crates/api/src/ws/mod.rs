//! WebSocket notification gateway.
//!
//! Provides connection management, room membership, the wire protocol,
//! heartbeat monitoring, and the HTTP upgrade handler used by Axum routes.

pub mod handler;
mod heartbeat;
pub mod manager;
pub mod protocol;
pub mod rooms;

pub use handler::{handle_text, ws_handler};
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
pub use rooms::{Room, RoomRegistry};
