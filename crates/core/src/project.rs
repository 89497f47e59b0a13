//! Project lifecycle statuses and field validation.
//!
//! Status is free-form among the six values below: any status may be set
//! from any other, there is no enforced transition order.

use crate::error::CoreError;
use crate::text::{validate_max_len, validate_required};

/// Maximum length of a project name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a project description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

pub const STATUS_IDEA: &str = "IDEA";
pub const STATUS_PRE_PRODUCTION: &str = "PRE_PRODUCTION";
pub const STATUS_PRODUCTION: &str = "PRODUCTION";
pub const STATUS_POST_PRODUCTION: &str = "POST_PRODUCTION";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_ARCHIVED: &str = "ARCHIVED";

/// Status applied by the schema default when none is supplied.
pub const DEFAULT_STATUS: &str = STATUS_IDEA;

/// Number of newest assets embedded in a project detail response.
pub const DETAIL_ASSET_LIMIT: i64 = 20;

/// All valid project statuses, in pipeline order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_IDEA,
    STATUS_PRE_PRODUCTION,
    STATUS_PRODUCTION,
    STATUS_POST_PRODUCTION,
    STATUS_COMPLETED,
    STATUS_ARCHIVED,
];

/// Validate that `status` is one of [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_required("name", name, MAX_NAME_LENGTH)
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_max_len("description", description, MAX_DESCRIPTION_LENGTH)
}
