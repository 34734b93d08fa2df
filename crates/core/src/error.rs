//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised when building domain values or a ledger from caller-supplied
/// configuration. Rejected reservations are not errors at this level; the
/// inventory crate reports those separately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty slot key).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two definitions collide (e.g. a slot key listed twice).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_detail() {
        assert_eq!(
            DomainError::invalid_id("SlotKey: empty").to_string(),
            "invalid identifier: SlotKey: empty"
        );
        assert_eq!(
            DomainError::conflict("duplicate slot '7:00 PM'").to_string(),
            "conflict: duplicate slot '7:00 PM'"
        );
    }
}
