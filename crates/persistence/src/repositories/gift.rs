//! Gift repository for store operations.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use domain::models::{
    CreateGiftRequest, Gift, GiftWithReservations, Reservation, UpdateGiftRequest,
};
use domain::services::build_views;

use crate::entities::GiftEntity;
use crate::error::StoreError;
use crate::metrics::{record_store_size, OperationTimer};
use crate::store::{RegistryStore, StoreState};

/// Repository for gift-related store operations.
#[derive(Clone)]
pub struct GiftRepository {
    store: RegistryStore,
}

impl GiftRepository {
    /// Creates a new GiftRepository over the given store.
    pub fn new(store: RegistryStore) -> Self {
        Self { store }
    }

    /// Create a new gift with a fresh identifier and timestamp.
    pub fn create(&self, request: &CreateGiftRequest) -> Result<Gift, StoreError> {
        let timer = OperationTimer::new("create_gift");
        let result = self.store.write().map(|mut state| {
            let gift = Gift {
                id: Uuid::new_v4(),
                name: request.name.trim().to_string(),
                description: request.description.clone(),
                quantity: request.quantity,
                price: request.price.clone(),
                created_at: Utc::now(),
            };
            let id = state.next_id();
            state
                .gifts
                .insert(gift.id, GiftEntity::from_gift(id, gift.clone()));
            record_store_size(state.stats());
            gift
        });
        timer.record();
        result
    }

    /// Find gift by UUID.
    pub fn find_by_id(&self, gift_id: Uuid) -> Result<Option<Gift>, StoreError> {
        let timer = OperationTimer::new("find_gift_by_id");
        let result = self
            .store
            .read()
            .map(|state| state.gifts.get(&gift_id).cloned().map(Gift::from));
        timer.record();
        result
    }

    /// List all gifts in insertion order.
    pub fn list(&self) -> Result<Vec<Gift>, StoreError> {
        let timer = OperationTimer::new("list_gifts");
        let result = self.store.read().map(|state| {
            state
                .gifts_ordered()
                .into_iter()
                .cloned()
                .map(Gift::from)
                .collect()
        });
        timer.record();
        result
    }

    /// Merge the provided fields into an existing gift.
    ///
    /// Returns `None` if the gift does not exist.
    pub fn update(
        &self,
        gift_id: Uuid,
        update: UpdateGiftRequest,
    ) -> Result<Option<Gift>, StoreError> {
        let timer = OperationTimer::new("update_gift");
        let result = self.store.write().map(|mut state| {
            let entity = state.gifts.get_mut(&gift_id)?;
            let mut gift = Gift::from(entity.clone());
            gift.apply(update);
            gift.name = gift.name.trim().to_string();
            *entity = GiftEntity::from_gift(entity.id, gift.clone());
            Some(gift)
        });
        timer.record();
        result
    }

    /// Delete a gift and every reservation that references it.
    ///
    /// Returns whether the gift existed.
    pub fn delete(&self, gift_id: Uuid) -> Result<bool, StoreError> {
        let timer = OperationTimer::new("delete_gift");
        let result = self.store.write().map(|mut state| {
            let before = state.reservations.len();
            state.reservations.retain(|_, r| r.gift_id != gift_id);
            let cascaded = before - state.reservations.len();
            let existed = state.gifts.remove(&gift_id).is_some();
            if cascaded > 0 {
                debug!(gift_id = %gift_id, cascaded, "Deleted reservations with gift");
            }
            record_store_size(state.stats());
            existed
        });
        timer.record();
        result
    }

    /// Build the gift-with-reservations view for every gift.
    pub fn list_with_reservations(&self) -> Result<Vec<GiftWithReservations>, StoreError> {
        let timer = OperationTimer::new("list_gifts_with_reservations");
        let result = self.store.read().map(|state| {
            let (gifts, reservations) = snapshot(&state);
            build_views(gifts, &reservations)
        });
        timer.record();
        result
    }

    /// Build the gift-with-reservations view for a single gift.
    pub fn find_with_reservations(
        &self,
        gift_id: Uuid,
    ) -> Result<Option<GiftWithReservations>, StoreError> {
        let timer = OperationTimer::new("find_gift_with_reservations");
        let result = self.store.read().map(|state| {
            let gift = state.gifts.get(&gift_id).cloned().map(Gift::from)?;
            let reservations: Vec<Reservation> = state
                .reservations_ordered()
                .into_iter()
                .filter(|r| r.gift_id == gift_id)
                .cloned()
                .map(Reservation::from)
                .collect();
            Some(GiftWithReservations::assemble(gift, &reservations))
        });
        timer.record();
        result
    }
}

/// Copies both collections out of the locked state, in insertion order.
fn snapshot(state: &StoreState) -> (Vec<Gift>, Vec<Reservation>) {
    let gifts = state
        .gifts_ordered()
        .into_iter()
        .cloned()
        .map(Gift::from)
        .collect();
    let reservations = state
        .reservations_ordered()
        .into_iter()
        .cloned()
        .map(Reservation::from)
        .collect();
    (gifts, reservations)
}
