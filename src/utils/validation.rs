//! Input validation primitives.
//!
//! Ergonomic helpers replacing verbose ok_or_else + Error constructor chains.

use crate::error::{Error, Result};

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message))
    } else {
        Ok(trimmed)
    }
}

/// Treat empty or whitespace-only values as absent.
///
/// Optional configuration variables set to "" behave as if unset.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_non_empty_passes_for_non_empty() {
        let result = require_non_empty("gpt2", "field", "msg");
        assert_eq!(result.unwrap(), "gpt2");
    }

    #[test]
    fn require_non_empty_trims_whitespace() {
        let result = require_non_empty("  gpt2  ", "field", "msg");
        assert_eq!(result.unwrap(), "gpt2");
    }

    #[test]
    fn require_non_empty_fails_for_empty() {
        let result = require_non_empty("", "field", "Cannot be empty");
        assert!(result.is_err());
    }

    #[test]
    fn require_non_empty_fails_for_whitespace_only() {
        let result = require_non_empty("   ", "field", "Cannot be empty");
        assert!(result.is_err());
    }

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some("4")), Some("4"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
    }
}
