//! Domain models for the gift registry.

pub mod gift;
pub mod reservation;
pub mod summary;

pub use gift::{
    CreateGiftRequest, Gift, GiftFilter, GiftWithReservations, ListGiftsQuery, UpdateGiftRequest,
};
pub use reservation::{CreateReservationRequest, NewReservation, Reservation};
pub use summary::RegistrySummary;
