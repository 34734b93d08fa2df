//! A single bookable slot and its read-only snapshot.

use serde::Serialize;

use boxoffice_core::{Capacity, Entity, SlotKey};

/// A bookable slot: fixed capacity plus the tickets still unreserved.
///
/// `remaining` never exceeds `capacity`; only the ledger mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    key: SlotKey,
    capacity: Capacity,
    remaining: u32,
}

impl Slot {
    /// A fresh slot with every ticket available.
    pub fn new(key: SlotKey, capacity: Capacity) -> Self {
        Self {
            key,
            capacity,
            remaining: capacity.get(),
        }
    }

    pub fn key(&self) -> &SlotKey {
        &self.key
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Tickets currently held, derived from this slot's own capacity.
    pub fn reserved(&self) -> u32 {
        self.capacity.get() - self.remaining
    }

    pub fn is_available(&self) -> bool {
        self.remaining > 0
    }

    pub fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            key: self.key.clone(),
            remaining: self.remaining,
            capacity: self.capacity,
            reserved: self.reserved(),
        }
    }

    /// Caller guarantees `tickets <= remaining`.
    pub(crate) fn take(&mut self, tickets: u32) {
        debug_assert!(tickets <= self.remaining);
        self.remaining -= tickets;
    }

    /// Caller guarantees `tickets <= reserved`.
    pub(crate) fn give_back(&mut self, tickets: u32) {
        debug_assert!(tickets <= self.reserved());
        self.remaining += tickets;
    }
}

impl Entity for Slot {
    type Id = SlotKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

/// Read-only view of a slot, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    pub key: SlotKey,
    pub remaining: u32,
    pub capacity: Capacity,
    pub reserved: u32,
}
