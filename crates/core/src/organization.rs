//! Organization (tenant) validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::text::validate_required;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_SLUG_LENGTH: usize = 50;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid slug regex"));

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_required("name", name, MAX_NAME_LENGTH)
}

/// Slugs are lowercase ASCII letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    validate_required("slug", slug, MAX_SLUG_LENGTH)?;
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Only lowercase letters, digits and '-' are allowed"
        )));
    }
    Ok(())
}
