//! Reservation domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::gift::MAX_QUANTITY;

/// Maximum length of the reserving visitor's name.
pub const MAX_RESERVED_BY_LENGTH: u64 = 100;

/// A claim by a named person on some quantity of a gift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub gift_id: Uuid,
    pub reserved_by: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

fn default_quantity() -> i32 {
    1
}

/// Request payload for reserving a gift.
///
/// `gift_id` stays a string at this layer; a value that is not a UUID simply
/// names no gift.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(length(min = 1, message = "Gift id is required"))]
    pub gift_id: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = MAX_RESERVED_BY_LENGTH, message = "Name must be at most 100 characters"))]
    pub reserved_by: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = MAX_QUANTITY, message = "Quantity must be between 1 and 10000"))]
    pub quantity: i32,
}

/// Validated reservation input handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub gift_id: Uuid,
    pub reserved_by: String,
    pub quantity: i32,
}

impl NewReservation {
    /// Builds store input from a validated request, trimming the visitor name.
    ///
    /// Returns `None` when `gift_id` is not a UUID.
    pub fn from_request(request: CreateReservationRequest) -> Option<Self> {
        let gift_id = Uuid::parse_str(request.gift_id.trim()).ok()?;
        Some(Self {
            gift_id,
            reserved_by: request.reserved_by.trim().to_string(),
            quantity: request.quantity,
        })
    }
}
