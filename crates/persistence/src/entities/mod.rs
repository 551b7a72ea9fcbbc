//! Stored entity definitions.
//!
//! Entities are the record layouts kept by the registry store.

pub mod gift;
pub mod reservation;

pub use gift::GiftEntity;
pub use reservation::ReservationEntity;
