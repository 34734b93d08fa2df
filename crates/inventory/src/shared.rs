//! Thread-safe handle over a single ledger.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ReservationError;
use crate::ledger::InventoryLedger;
use crate::slot::SlotSnapshot;

/// Cloneable handle sharing one [`InventoryLedger`] between threads.
///
/// One lock per ledger: each operation runs its whole check-then-mutate
/// sequence inside a single lock scope.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<InventoryLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: InventoryLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // Ledger operations never panic between check and mutate, so a poisoned
    // lock still guards a consistent ledger.
    fn lock(&self) -> MutexGuard<'_, InventoryLedger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_available(&self, slot: &str) -> bool {
        self.lock().is_available(slot)
    }

    pub fn remaining(&self, slot: &str) -> Option<u32> {
        self.lock().remaining(slot)
    }

    pub fn reserve(&self, slot: &str, quantity: i64) -> bool {
        self.lock().reserve(slot, quantity)
    }

    pub fn release(&self, slot: &str, quantity: i64) -> bool {
        self.lock().release(slot, quantity)
    }

    pub fn try_reserve(
        &self,
        slot: &str,
        quantity: i64,
    ) -> Result<SlotSnapshot, ReservationError> {
        self.lock().try_reserve(slot, quantity)
    }

    pub fn try_release(
        &self,
        slot: &str,
        quantity: i64,
    ) -> Result<SlotSnapshot, ReservationError> {
        self.lock().try_release(slot, quantity)
    }

    pub fn list_slots(&self) -> Vec<SlotSnapshot> {
        self.lock().list_slots()
    }
}

impl From<InventoryLedger> for SharedLedger {
    fn from(ledger: InventoryLedger) -> Self {
        Self::new(ledger)
    }
}
