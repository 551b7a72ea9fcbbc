//! Reservation repository for store operations.

use chrono::Utc;
use uuid::Uuid;

use domain::models::{NewReservation, Reservation};
use domain::services::ensure_available;

use crate::entities::ReservationEntity;
use crate::error::StoreError;
use crate::metrics::{record_store_size, OperationTimer};
use crate::store::{RegistryStore, StoreState};

/// Repository for reservation-related store operations.
#[derive(Clone)]
pub struct ReservationRepository {
    store: RegistryStore,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository over the given store.
    pub fn new(store: RegistryStore) -> Self {
        Self { store }
    }

    /// Record a reservation without checking availability or the gift.
    ///
    /// Use [`ReservationRepository::reserve`] for visitor-facing reservations.
    pub fn create(&self, input: &NewReservation) -> Result<Reservation, StoreError> {
        let timer = OperationTimer::new("create_reservation");
        let result = self.store.write().map(|mut state| insert(&mut state, input));
        timer.record();
        result
    }

    /// Reserve units of a gift if enough remain.
    ///
    /// The gift lookup, the availability check and the insert happen under a
    /// single write lock, so concurrent reservations cannot oversell a gift.
    pub fn reserve(&self, input: &NewReservation) -> Result<Reservation, StoreError> {
        let timer = OperationTimer::new("reserve_gift");
        let result = self.store.write().and_then(|mut state| {
            let quantity = state
                .gifts
                .get(&input.gift_id)
                .map(|g| g.quantity)
                .ok_or(StoreError::GiftNotFound(input.gift_id))?;
            let reserved = state.reserved_units(input.gift_id);
            ensure_available(quantity, reserved, input.quantity)?;
            Ok(insert(&mut state, input))
        });
        timer.record();
        result
    }

    /// List all reservations in insertion order.
    pub fn list(&self) -> Result<Vec<Reservation>, StoreError> {
        let timer = OperationTimer::new("list_reservations");
        let result = self.store.read().map(|state| {
            state
                .reservations_ordered()
                .into_iter()
                .cloned()
                .map(Reservation::from)
                .collect()
        });
        timer.record();
        result
    }

    /// Find all reservations for a gift, in insertion order.
    pub fn find_by_gift_id(&self, gift_id: Uuid) -> Result<Vec<Reservation>, StoreError> {
        let timer = OperationTimer::new("find_reservations_by_gift");
        let result = self.store.read().map(|state| {
            state
                .reservations_ordered()
                .into_iter()
                .filter(|r| r.gift_id == gift_id)
                .cloned()
                .map(Reservation::from)
                .collect()
        });
        timer.record();
        result
    }
}

fn insert(state: &mut StoreState, input: &NewReservation) -> Reservation {
    let reservation = Reservation {
        id: Uuid::new_v4(),
        gift_id: input.gift_id,
        reserved_by: input.reserved_by.clone(),
        quantity: input.quantity,
        created_at: Utc::now(),
    };
    let entity = ReservationEntity {
        id: state.next_id(),
        reservation_id: reservation.id,
        gift_id: reservation.gift_id,
        reserved_by: reservation.reserved_by.clone(),
        quantity: reservation.quantity,
        created_at: reservation.created_at,
    };
    state.reservations.insert(reservation.id, entity);
    record_store_size(state.stats());
    reservation
}
