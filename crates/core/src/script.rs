//! Script field validation and the version numbering rule.

use crate::error::CoreError;
use crate::text::{validate_max_len, validate_required};

/// Maximum length of a script title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a version change description.
pub const MAX_CHANGE_DESCRIPTION_LENGTH: usize = 500;

/// Version number assigned to a freshly created script.
pub const INITIAL_VERSION: i32 = 1;

/// Number of most recent versions embedded in a script detail response.
pub const DETAIL_VERSION_LIMIT: i64 = 10;

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("title", title, MAX_TITLE_LENGTH)
}

pub fn validate_change_description(description: &str) -> Result<(), CoreError> {
    validate_max_len("change_description", description, MAX_CHANGE_DESCRIPTION_LENGTH)
}

/// Version the live row carries after a content change.
///
/// The snapshot row keeps `current`; the live row moves to `current + 1`.
pub fn next_version(current: i32) -> i32 {
    current + 1
}
