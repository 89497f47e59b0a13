//! Broadcast bus carrying [`PlatformEvent`]s from REST handlers to the
//! project event router.

use tokio::sync::broadcast;
use uwrap_core::types::DbId;

/// Something that changed in a project, published after the write commits.
#[derive(Debug, Clone)]
pub struct PlatformEvent {
    /// Name from [`crate::event_types`]; reused as the WebSocket event name.
    pub event_type: String,
    /// Project room to fan out to. `None` is never routed.
    pub project_id: Option<DbId>,
    /// Kind and id of the changed row, e.g. `("script", 42)`.
    pub entity: Option<(String, DbId)>,
    /// User behind the change, when the request names one (lock holder).
    pub actor_id: Option<DbId>,
    /// Frame body sent to subscribers, usually the serialized row.
    pub payload: serde_json::Value,
}

impl PlatformEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            project_id: None,
            entity: None,
            actor_id: None,
            payload: serde_json::json!({}),
        }
    }

    pub fn with_project(mut self, project_id: DbId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_entity(mut self, kind: impl Into<String>, id: DbId) -> Self {
        self.entity = Some((kind.into(), id));
        self
    }

    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_id = Some(user_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

const DEFAULT_CAPACITY: usize = 1024;

/// Shared as `Arc<EventBus>` in the app state. Slow receivers see
/// `RecvError::Lagged` once `capacity` events are buffered.
pub struct EventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Fire and forget; dropped when nobody is subscribed.
    pub fn publish(&self, event: PlatformEvent) {
        tracing::trace!(event_type = %event.event_type, project_id = ?event.project_id, "Publishing event");
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
