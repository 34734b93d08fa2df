//! Inventory domain module.
//!
//! This crate holds the per-slot ticket ledger: deterministic domain logic
//! with no IO, no HTTP and no storage. Rejected operations are reported, never
//! raised.

pub mod error;
pub mod ledger;
pub mod shared;
pub mod slot;

pub use error::{RejectionReason, ReservationError};
pub use ledger::InventoryLedger;
pub use shared::SharedLedger;
pub use slot::{Slot, SlotSnapshot};
