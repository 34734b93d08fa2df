//! Ticket allotment of a slot.

use serde::{Deserialize, Serialize};

/// Fixed ticket allotment of a slot.
///
/// Set once when a ledger is built and never changed afterwards. Zero is a
/// valid allotment: such a slot exists but is never available.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(u32);

impl Capacity {
    /// Tickets allotted to a slot when no explicit capacity is given.
    pub const DEFAULT: Capacity = Capacity(50);

    pub const fn new(tickets: u32) -> Self {
        Self(tickets)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Display for Capacity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for Capacity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_fifty() {
        assert_eq!(Capacity::default().get(), 50);
    }

    #[test]
    fn zero_capacity_is_allowed() {
        assert_eq!(Capacity::new(0).get(), 0);
        let parsed: Capacity = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Capacity::from(0));
    }
}
