//! Script and script version models and DTOs.
//!
//! A script's live row carries the current `version`. Every update that
//! carries `content` first snapshots the pre-update title/content into
//! `script_versions`, tagged with the version number being replaced.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uwrap_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

/// A row from the `scripts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Script {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub is_locked: bool,
    pub locked_by_id: Option<DbId>,
    pub locked_at: Option<Timestamp>,
    pub created_by_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Script list entry with the creator and lock holder names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScriptWithUsers {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub script: Script,
    /// Joined from `users.name` via `created_by_id`.
    pub created_by_name: Option<String>,
    /// Joined from `users.name` via `locked_by_id`.
    pub locked_by_name: Option<String>,
}

/// DTO for creating a script. New scripts always start at version 1.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScript {
    pub project_id: DbId,
    pub title: String,
    /// Defaults to the empty document.
    pub content: Option<String>,
    pub created_by_id: Option<DbId>,
}

/// DTO for updating a script. All fields are optional.
///
/// Presence of `content` triggers a version snapshot; `updated_by_id` and
/// `change_description` are recorded on that snapshot only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScript {
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_by_id: Option<DbId>,
    pub change_description: Option<String>,
}

impl UpdateScript {
    /// True when the patch carries non-empty content. Only such edits are
    /// versioned; `""` clears the live content without a snapshot.
    pub fn edits_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Request body for `POST /scripts/{id}/lock`.
#[derive(Debug, Clone, Deserialize)]
pub struct LockScriptRequest {
    pub user_id: DbId,
}

// ---------------------------------------------------------------------------
// Script versions
// ---------------------------------------------------------------------------

/// A row from the `script_versions` table. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScriptVersion {
    pub id: DbId,
    pub script_id: DbId,
    pub version: i32,
    pub title: String,
    pub content: String,
    pub change_description: Option<String>,
    pub created_by_id: Option<DbId>,
    pub created_at: Timestamp,
}
