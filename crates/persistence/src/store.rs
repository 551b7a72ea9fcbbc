//! In-memory registry store.
//!
//! Holds the gift and reservation collections for the lifetime of the
//! process. One handle is created at startup and cloned into every
//! repository; all clones share the same state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::entities::{GiftEntity, ReservationEntity};
use crate::error::StoreError;

/// Collections guarded by the store lock.
#[derive(Debug, Default)]
pub struct StoreState {
    pub(crate) gifts: HashMap<Uuid, GiftEntity>,
    pub(crate) reservations: HashMap<Uuid, ReservationEntity>,
    last_id: i64,
}

impl StoreState {
    /// Hands out the next insertion sequence number.
    pub(crate) fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Gifts in insertion order.
    pub(crate) fn gifts_ordered(&self) -> Vec<&GiftEntity> {
        let mut gifts: Vec<_> = self.gifts.values().collect();
        gifts.sort_by_key(|g| g.id);
        gifts
    }

    /// Reservations in insertion order.
    pub(crate) fn reservations_ordered(&self) -> Vec<&ReservationEntity> {
        let mut reservations: Vec<_> = self.reservations.values().collect();
        reservations.sort_by_key(|r| r.id);
        reservations
    }

    /// Sum of reserved units for one gift.
    pub(crate) fn reserved_units(&self, gift_id: Uuid) -> i64 {
        self.reservations
            .values()
            .filter(|r| r.gift_id == gift_id)
            .map(|r| i64::from(r.quantity))
            .sum()
    }

    pub(crate) fn stats(&self) -> StoreStats {
        StoreStats {
            gifts: self.gifts.len(),
            reservations: self.reservations.len(),
        }
    }
}

/// Record counts, used by health checks and size gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub gifts: usize,
    pub reservations: usize,
}

/// Shared handle to the registry collections.
#[derive(Debug, Clone, Default)]
pub struct RegistryStore {
    state: Arc<RwLock<StoreState>>,
}

impl RegistryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Verifies the store is usable and returns its record counts.
    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        Ok(self.read()?.stats())
    }
}
