//! URL slug validation.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum slug length accepted anywhere on the site.
pub const MAX_SLUG_LEN: usize = 100;

/// Lowercase ASCII letters, digits and hyphens.
pub static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Validates a slug used in `/person/{slug}`, `/country/{slug}` and
/// `/industry/{slug}` URLs.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the slug is empty, too long or
/// contains anything but `a-z`, `0-9` and single inner hyphens.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return Err(AppError::bad_request(
            "Invalid slug length",
            json!({ "min": 1, "max": MAX_SLUG_LEN }),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Invalid characters in slug",
            json!({ "allowed": "a-z, 0-9, hyphens" }),
        ));
    }

    Ok(())
}
