//! Persistence layer for the gift registry backend.
//!
//! This crate contains:
//! - The in-memory registry store
//! - Entity definitions (stored record layouts)
//! - Repository implementations

pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{RegistryStore, StoreStats};
