//! Bucket name validation
//!
//! Directory names are S3 bucket names underneath, so they are checked
//! against the provider's naming rules before any request is made.

use crate::error::{Error, Result};

/// Validate a bucket name against S3 naming rules
///
/// Names must be 3-63 characters of lowercase alphanumerics, `-` or `.`,
/// starting and ending with an alphanumeric. An empty name is its own error
/// class so the shell can report it distinctly.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    if name.len() < 3 || name.len() > 63 {
        return Err(Error::InvalidName);
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.');
    if !valid_chars {
        return Err(Error::InvalidName);
    }

    let first = name.chars().next().unwrap_or_default();
    let last = name.chars().last().unwrap_or_default();
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return Err(Error::InvalidName);
    }

    if name.contains("..") {
        return Err(Error::InvalidName);
    }

    Ok(())
}
