//! Room membership for the notification gateway.
//!
//! A room is a named group of connections. Users join `user:{id}` at
//! connect time; clients opt into `project:{id}` via subscribe frames.

use std::collections::{HashMap, HashSet};
use std::fmt;

use uwrap_core::types::DbId;

/// A named group of WebSocket connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    User(DbId),
    Project(DbId),
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Room::User(id) => write!(f, "user:{id}"),
            Room::Project(id) => write!(f, "project:{id}"),
        }
    }
}

/// Mapping from room to the set of connection ids in it.
///
/// Empty rooms are removed eagerly so `room_count` reflects live rooms.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<Room, HashSet<String>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection to a room. Returns `false` if it was already a member.
    pub fn join(&mut self, room: Room, conn_id: &str) -> bool {
        self.rooms
            .entry(room)
            .or_default()
            .insert(conn_id.to_string())
    }

    /// Remove a connection from a room. Returns `false` if it was not a member.
    pub fn leave(&mut self, room: Room, conn_id: &str) -> bool {
        let Some(members) = self.rooms.get_mut(&room) else {
            return false;
        };
        let removed = members.remove(conn_id);
        if members.is_empty() {
            self.rooms.remove(&room);
        }
        removed
    }

    /// Remove a connection from every room it belongs to.
    pub fn leave_all(&mut self, conn_id: &str) {
        self.rooms.retain(|_, members| {
            members.remove(conn_id);
            !members.is_empty()
        });
    }

    /// Connection ids currently in `room`.
    pub fn members(&self, room: Room) -> Vec<String> {
        self.rooms
            .get(&room)
            .map(|m| m.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_member(&self, room: Room, conn_id: &str) -> bool {
        self.rooms.get(&room).is_some_and(|m| m.contains(conn_id))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
