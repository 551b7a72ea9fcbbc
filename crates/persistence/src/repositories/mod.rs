//! Repository implementations for store operations.

pub mod gift;
pub mod reservation;

pub use gift::GiftRepository;
pub use reservation::ReservationRepository;
