//! Domain layer for the gift registry backend.
//!
//! This crate contains:
//! - Domain models (Gift, Reservation and the derived views)
//! - Request schemas with their validation rules
//! - Availability computation

pub mod models;
pub mod services;
