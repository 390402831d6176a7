//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Submits
//! either pass entirely or are rejected with a message; nothing is
//! partially saved.

use crate::repository::{RepoError, RepoResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employees, expense labels
pub const MAX_NAME_LEN: usize = 200;

/// Notes and request messages
pub const MAX_NOTE_LEN: usize = 500;

/// Short free-text fields: expense category, payment method
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> RepoResult<()> {
    if value.trim().is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> RepoResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Fish delivery", "label", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "label", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "label", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }
}
