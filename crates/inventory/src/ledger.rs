use std::collections::HashMap;

use boxoffice_core::{Capacity, DomainError, DomainResult, Entity, SlotKey};

use crate::error::ReservationError;
use crate::slot::{Slot, SlotSnapshot};

/// Per-slot ticket ledger.
///
/// The set of slots is fixed at construction. Every operation is a single
/// check-then-mutate on one slot: it either applies completely or leaves the
/// ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLedger {
    /// Construction order, used for listings.
    slots: Vec<Slot>,
    index: HashMap<SlotKey, usize>,
}

impl InventoryLedger {
    /// Build a ledger from explicit `(slot key, capacity)` pairs.
    ///
    /// Keys are stored verbatim. Fails on empty keys and on keys listed
    /// more than once.
    pub fn new<I, K>(definitions: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (K, Capacity)>,
        K: AsRef<str>,
    {
        let mut slots = Vec::new();
        let mut index = HashMap::new();

        for (raw_key, capacity) in definitions {
            let slot = Slot::new(SlotKey::parse(raw_key.as_ref())?, capacity);
            if index.contains_key(slot.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate slot '{}'",
                    slot.id()
                )));
            }
            index.insert(slot.id().clone(), slots.len());
            slots.push(slot);
        }

        Ok(Self { slots, index })
    }

    /// Build a ledger where every slot gets the same capacity.
    pub fn uniform<I, K>(keys: I, capacity: Capacity) -> DomainResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self::new(keys.into_iter().map(|k| (k, capacity)))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.index.contains_key(slot)
    }

    /// True iff `slot` exists and has at least one ticket left.
    pub fn is_available(&self, slot: &str) -> bool {
        self.find(slot).is_some_and(Slot::is_available)
    }

    pub fn remaining(&self, slot: &str) -> Option<u32> {
        self.find(slot).map(Slot::remaining)
    }

    pub fn capacity(&self, slot: &str) -> Option<Capacity> {
        self.find(slot).map(Slot::capacity)
    }

    pub fn reserved(&self, slot: &str) -> Option<u32> {
        self.find(slot).map(Slot::reserved)
    }

    pub fn slot(&self, slot: &str) -> Option<SlotSnapshot> {
        self.find(slot).map(Slot::snapshot)
    }

    /// All slots in construction order.
    pub fn list_slots(&self) -> Vec<SlotSnapshot> {
        self.slots.iter().map(Slot::snapshot).collect()
    }

    /// Reserve `quantity` tickets. Returns `false` (state unchanged) on any rejection.
    pub fn reserve(&mut self, slot: &str, quantity: i64) -> bool {
        self.try_reserve(slot, quantity).is_ok()
    }

    /// Release `quantity` previously reserved tickets. Returns `false`
    /// (state unchanged) on any rejection.
    pub fn release(&mut self, slot: &str, quantity: i64) -> bool {
        self.try_release(slot, quantity).is_ok()
    }

    pub fn try_reserve(
        &mut self,
        slot: &str,
        quantity: i64,
    ) -> Result<SlotSnapshot, ReservationError> {
        let result = self.handle_reserve(slot, quantity);
        match &result {
            Ok(after) => tracing::info!(
                slot = %after.key,
                quantity,
                remaining = after.remaining,
                "tickets reserved"
            ),
            Err(err) => tracing::warn!(
                slot,
                quantity,
                reason = %err.reason(),
                "reservation rejected: {err}"
            ),
        }
        result
    }

    pub fn try_release(
        &mut self,
        slot: &str,
        quantity: i64,
    ) -> Result<SlotSnapshot, ReservationError> {
        let result = self.handle_release(slot, quantity);
        match &result {
            Ok(after) => tracing::info!(
                slot = %after.key,
                quantity,
                remaining = after.remaining,
                "tickets released"
            ),
            Err(err) => tracing::warn!(
                slot,
                quantity,
                reason = %err.reason(),
                "release rejected: {err}"
            ),
        }
        result
    }
}

impl InventoryLedger {
    fn find(&self, slot: &str) -> Option<&Slot> {
        self.index.get(slot).map(|&pos| &self.slots[pos])
    }

    fn ensure_slot(&self, slot: &str) -> Result<usize, ReservationError> {
        self.index
            .get(slot)
            .copied()
            .ok_or_else(|| ReservationError::UnknownSlot {
                slot: slot.to_string(),
            })
    }

    fn ensure_positive(quantity: i64) -> Result<(), ReservationError> {
        if quantity <= 0 {
            return Err(ReservationError::InvalidQuantity { quantity });
        }
        Ok(())
    }

    fn handle_reserve(
        &mut self,
        slot: &str,
        quantity: i64,
    ) -> Result<SlotSnapshot, ReservationError> {
        let pos = self.ensure_slot(slot)?;
        Self::ensure_positive(quantity)?;

        let target = &mut self.slots[pos];
        let remaining = target.remaining();
        if quantity > i64::from(remaining) {
            return Err(ReservationError::InsufficientRemaining {
                slot: target.key().to_string(),
                requested: quantity,
                remaining,
            });
        }

        // Bounded by `remaining` above, so the cast is lossless.
        target.take(quantity as u32);
        Ok(target.snapshot())
    }

    fn handle_release(
        &mut self,
        slot: &str,
        quantity: i64,
    ) -> Result<SlotSnapshot, ReservationError> {
        let pos = self.ensure_slot(slot)?;
        Self::ensure_positive(quantity)?;

        let target = &mut self.slots[pos];
        let reserved = target.reserved();
        if quantity > i64::from(reserved) {
            return Err(ReservationError::OverRelease {
                slot: target.key().to_string(),
                requested: quantity,
                reserved,
            });
        }

        target.give_back(quantity as u32);
        Ok(target.snapshot())
    }
}
