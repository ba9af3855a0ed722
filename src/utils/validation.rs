//! Input validation utilities

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Parse a raw user identifier
///
/// The engine receives identifiers as opaque strings from its caller; a
/// malformed identifier is an input error, not a missing user.
pub fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("User id cannot be empty".to_string()));
    }
    Uuid::parse_str(trimmed)
        .map_err(|_| AppError::InvalidInput(format!("Malformed user id: {trimmed}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert!(parse_user_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(parse_user_id("  550e8400-e29b-41d4-a716-446655440000  ").is_ok());
        assert!(parse_user_id("").is_err());
        assert!(parse_user_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_parse_user_id_error_kind() {
        let err = parse_user_id("42").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
