//! Event fan-out to WebSocket rooms.
//!
//! The [`ProjectEventRouter`] subscribes to the event bus and forwards each
//! project-scoped event to the matching `project:{id}` room.

pub mod router;

pub use router::ProjectEventRouter;
