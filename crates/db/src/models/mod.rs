//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable columns in update DTOs are `Option<Option<T>>`: an absent key
//! is `None` (keep), an explicit `null` is `Some(None)` (clear).

use serde::{Deserialize, Deserializer};

pub mod asset;
pub mod notification;
pub mod organization;
pub mod project;
pub mod script;
pub mod shooting_day;
pub mod user;

/// Deserialize a present key into `Some(..)`, so `null` becomes `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
