//! Store error type.

use domain::services::InsufficientAvailability;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by store and repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Gift not found: {0}")]
    GiftNotFound(Uuid),

    #[error(transparent)]
    InsufficientAvailability(#[from] InsufficientAvailability),
}
