//! Why a reservation or release was turned away.

use serde::Serialize;
use thiserror::Error;

/// Stable tag for a rejection, suitable for structured logs and JSON output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    UnknownSlot,
    InvalidQuantity,
    InsufficientRemaining,
    OverRelease,
}

impl RejectionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectionReason::UnknownSlot => "unknown_slot",
            RejectionReason::InvalidQuantity => "invalid_quantity",
            RejectionReason::InsufficientRemaining => "insufficient_remaining",
            RejectionReason::OverRelease => "over_release",
        }
    }
}

impl core::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected ledger operation.
///
/// All variants are normal outcomes; the ledger state is untouched whenever
/// one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("showtime not found: {slot}")]
    UnknownSlot { slot: String },

    #[error("invalid ticket number: {quantity}")]
    InvalidQuantity { quantity: i64 },

    #[error(
        "not enough tickets available for {slot} (requested {requested}, remaining {remaining})"
    )]
    InsufficientRemaining {
        slot: String,
        requested: i64,
        remaining: u32,
    },

    #[error("cannot release {requested} tickets for {slot}: only {reserved} reserved")]
    OverRelease {
        slot: String,
        requested: i64,
        reserved: u32,
    },
}

impl ReservationError {
    pub fn reason(&self) -> RejectionReason {
        match self {
            ReservationError::UnknownSlot { .. } => RejectionReason::UnknownSlot,
            ReservationError::InvalidQuantity { .. } => RejectionReason::InvalidQuantity,
            ReservationError::InsufficientRemaining { .. } => {
                RejectionReason::InsufficientRemaining
            }
            ReservationError::OverRelease { .. } => RejectionReason::OverRelease,
        }
    }
}
