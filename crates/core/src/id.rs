//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a bookable slot (e.g. a show time such as `"10:00 AM"`).
///
/// Opaque: the text is kept exactly as given, whitespace included, and two
/// keys are the same slot iff their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotKey(String);

impl SlotKey {
    /// Parse a slot key. Only the empty string is rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::invalid_id("SlotKey: cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SlotKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for SlotKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SlotKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SlotKey> for String {
    fn from(value: SlotKey) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_text_verbatim() {
        let key = SlotKey::parse(" 4:00 PM ").unwrap();
        assert_eq!(key.as_str(), " 4:00 PM ");
        assert_ne!(key, SlotKey::parse("4:00 PM").unwrap());
    }

    #[test]
    fn only_empty_keys_are_rejected() {
        assert!(matches!(SlotKey::parse(""), Err(DomainError::InvalidId(_))));
        assert!("   ".parse::<SlotKey>().is_ok());
    }

    #[test]
    fn serde_is_transparent_and_validated() {
        let key = SlotKey::parse("10:00 AM").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"10:00 AM\"");

        let back: SlotKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<SlotKey>("\"\"").is_err());
    }
}
