//! Event-to-room routing.

use std::sync::Arc;

use tokio::sync::broadcast;
use uwrap_events::PlatformEvent;

use crate::ws::WsManager;

/// Forwards platform events to the project room they belong to.
///
/// Events without a `project_id` are ignored. Delivery is at-most-once.
pub struct ProjectEventRouter {
    ws_manager: Arc<WsManager>,
}

impl ProjectEventRouter {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main routing loop.
    ///
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](uwrap_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    self.route_event(&event).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Project event router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, project event router shutting down");
                    break;
                }
            }
        }
    }

    /// Emit a single event to its project room. Returns the number of
    /// connections reached.
    pub async fn route_event(&self, event: &PlatformEvent) -> usize {
        let Some(project_id) = event.project_id else {
            tracing::trace!(event_type = %event.event_type, "Event has no project, skipping");
            return 0;
        };
        let delivered = self
            .ws_manager
            .notify_project(project_id, &event.event_type, &event.payload)
            .await;
        if let Some((kind, id)) = &event.entity {
            tracing::debug!(
                event_type = %event.event_type,
                entity = %kind,
                entity_id = id,
                actor_id = ?event.actor_id,
                delivered,
                "Routed entity event"
            );
        }
        delivered
    }
}
