//! User field validation.

use crate::error::CoreError;
use crate::text::{validate_max_len, validate_required};

pub const MAX_EMAIL_LENGTH: usize = 320;
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimal shape check: one `@` with a non-empty local part and domain.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_required("email", email, MAX_EMAIL_LENGTH)?;
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        ))),
    }
}

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_max_len("name", name, MAX_NAME_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(validate_email("director@studio.test").is_ok());
        assert!(validate_email("director").is_err());
        assert!(validate_email("@studio.test").is_err());
        assert!(validate_email("director@").is_err());
        assert!(validate_email("a@b@c").is_err());
    }
}
