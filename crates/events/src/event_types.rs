//! Dot-separated event names published by the API handlers.
//!
//! The same names are used as the WebSocket event name when an event is
//! fanned out to a project room.

pub const PROJECT_UPDATED: &str = "project.updated";

pub const SCRIPT_CREATED: &str = "script.created";
pub const SCRIPT_UPDATED: &str = "script.updated";
pub const SCRIPT_DELETED: &str = "script.deleted";
pub const SCRIPT_LOCKED: &str = "script.locked";
pub const SCRIPT_UNLOCKED: &str = "script.unlocked";

pub const ASSET_CREATED: &str = "asset.created";
pub const ASSET_DELETED: &str = "asset.deleted";

pub const SHOOTING_DAY_UPDATED: &str = "shooting_day.updated";
