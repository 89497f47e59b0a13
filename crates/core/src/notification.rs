//! Notification types and validation.

use crate::error::CoreError;
use crate::text::validate_required;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_MESSAGE_LENGTH: usize = 2_000;

pub const TYPE_PROJECT_CREATED: &str = "PROJECT_CREATED";
pub const TYPE_PROJECT_UPDATED: &str = "PROJECT_UPDATED";
pub const TYPE_PROJECT_INVITE: &str = "PROJECT_INVITE";
pub const TYPE_SCRIPT_COMMENT: &str = "SCRIPT_COMMENT";
pub const TYPE_SCRIPT_LOCKED: &str = "SCRIPT_LOCKED";
pub const TYPE_SHOOTING_DAY_UPDATED: &str = "SHOOTING_DAY_UPDATED";
pub const TYPE_ASSET_UPLOADED: &str = "ASSET_UPLOADED";
pub const TYPE_CALL_SHEET_GENERATED: &str = "CALL_SHEET_GENERATED";

pub const VALID_TYPES: &[&str] = &[
    TYPE_PROJECT_CREATED,
    TYPE_PROJECT_UPDATED,
    TYPE_PROJECT_INVITE,
    TYPE_SCRIPT_COMMENT,
    TYPE_SCRIPT_LOCKED,
    TYPE_SHOOTING_DAY_UPDATED,
    TYPE_ASSET_UPLOADED,
    TYPE_CALL_SHEET_GENERATED,
];

/// Event name emitted to a user room when a notification is pushed.
pub const USER_EVENT_NAME: &str = "notification";

pub fn validate_type(notification_type: &str) -> Result<(), CoreError> {
    if VALID_TYPES.contains(&notification_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid notification type '{notification_type}'. Must be one of: {}",
            VALID_TYPES.join(", ")
        )))
    }
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("title", title, MAX_TITLE_LENGTH)
}

pub fn validate_message(message: &str) -> Result<(), CoreError> {
    validate_required("message", message, MAX_MESSAGE_LENGTH)
}
