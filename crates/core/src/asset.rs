//! Asset types and field validation.

use crate::error::CoreError;
use crate::text::{validate_max_len, validate_required};

/// Maximum length of an asset name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of an asset description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Maximum length of a single tag.
pub const MAX_TAG_LENGTH: usize = 50;

pub const TYPE_IMAGE: &str = "IMAGE";
pub const TYPE_VIDEO: &str = "VIDEO";
pub const TYPE_AUDIO: &str = "AUDIO";
pub const TYPE_DOCUMENT: &str = "DOCUMENT";
pub const TYPE_OTHER: &str = "OTHER";

/// All valid asset types.
pub const VALID_TYPES: &[&str] = &[TYPE_IMAGE, TYPE_VIDEO, TYPE_AUDIO, TYPE_DOCUMENT, TYPE_OTHER];

/// Validate that `asset_type` is one of [`VALID_TYPES`].
pub fn validate_type(asset_type: &str) -> Result<(), CoreError> {
    if VALID_TYPES.contains(&asset_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid asset type '{asset_type}'. Must be one of: {}",
            VALID_TYPES.join(", ")
        )))
    }
}

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_required("name", name, MAX_NAME_LENGTH)
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_max_len("description", description, MAX_DESCRIPTION_LENGTH)
}

/// Validate every tag against [`MAX_TAG_LENGTH`].
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    tags.iter()
        .try_for_each(|tag| validate_max_len("tag", tag, MAX_TAG_LENGTH))
}

/// Validate a byte size reported by the uploader.
pub fn validate_size(size: i64) -> Result<(), CoreError> {
    if size < 0 {
        return Err(CoreError::Validation(
            "size must be zero or positive".to_string(),
        ));
    }
    Ok(())
}
