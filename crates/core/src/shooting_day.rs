//! Shooting schedule statuses and call/wrap time validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::text::{validate_max_len, validate_required};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_LOCATION_LENGTH: usize = 500;

pub const STATUS_PLANNED: &str = "PLANNED";
pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

pub const VALID_STATUSES: &[&str] = &[
    STATUS_PLANNED,
    STATUS_CONFIRMED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// 24-hour `H:MM` or `HH:MM`.
static TIME_OF_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time-of-day regex")
});

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid shooting day status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a call or wrap time such as `07:30`.
pub fn validate_time_of_day(field: &str, value: &str) -> Result<(), CoreError> {
    if TIME_OF_DAY_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a 24-hour time (HH:MM), got '{value}'"
        )))
    }
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("title", title, MAX_TITLE_LENGTH)
}

pub fn validate_location(location: &str) -> Result<(), CoreError> {
    validate_max_len("location", location, MAX_LOCATION_LENGTH)
}

pub fn validate_sort_order(sort_order: i32) -> Result<(), CoreError> {
    if sort_order < 0 {
        return Err(CoreError::Validation(
            "sort_order must be zero or positive".to_string(),
        ));
    }
    Ok(())
}
