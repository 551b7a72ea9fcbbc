//! HTTP route handlers.

pub mod gifts;
pub mod health;
pub mod reservations;
pub mod summary;
