//! Request handlers, one module per resource.
//!
//! Handlers validate input with the `uwrap_core` rules, call the
//! repositories, and publish a [`PlatformEvent`] after each successful
//! project-scoped mutation.

pub mod asset;
pub mod notification;
pub mod organization;
pub mod project;
pub mod script;
pub mod shooting_day;
pub mod user;

use serde::Serialize;
use uwrap_core::types::DbId;
use uwrap_db::repositories::ProjectRepo;
use uwrap_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Return `NotFound` unless the project exists.
pub(crate) async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::not_found("Project", project_id))
}

/// Publish a project-scoped event whose payload is the serialized entity.
pub(crate) fn publish_entity_event<T: Serialize>(
    state: &AppState,
    event_type: &str,
    project_id: DbId,
    entity_type: &str,
    entity_id: DbId,
    entity: &T,
) {
    let payload = serde_json::to_value(entity).unwrap_or_default();
    state.event_bus.publish(
        PlatformEvent::new(event_type)
            .with_project(project_id)
            .with_entity(entity_type, entity_id)
            .with_payload(payload),
    );
}
