//! Domain services for the gift registry.
//!
//! Services contain business logic that operates on domain models.

pub mod availability;

pub use availability::{
    available_quantity, build_views, ensure_available, reserved_quantity,
    InsufficientAvailability,
};
