//! Gift domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use shared::validation::{validate_max_chars, validate_not_blank};

use super::reservation::Reservation;

/// Maximum length of a gift name.
pub const MAX_NAME_LENGTH: u64 = 200;

/// Maximum length of a gift description.
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

/// Maximum length of the free-form price label.
pub const MAX_PRICE_LENGTH: u64 = 50;

/// Largest quantity a single gift may offer.
pub const MAX_QUANTITY: i32 = 10_000;

/// A wishlist item with a total offerable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    /// Display-only price label, e.g. "$25" or "20-30 EUR".
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Gift {
    /// Applies the fields present in a partial update.
    pub fn apply(&mut self, update: UpdateGiftRequest) {
        // `null` on name or quantity is rejected by validation; skip it here too.
        if let Some(Some(name)) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(Some(quantity)) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}

fn default_quantity() -> i32 {
    1
}

/// Request payload for creating a gift.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = MAX_NAME_LENGTH, message = "Name must be at most 200 characters"))]
    pub name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = MAX_QUANTITY, message = "Quantity must be between 1 and 10000"))]
    pub quantity: i32,

    #[validate(length(max = MAX_PRICE_LENGTH, message = "Price must be at most 50 characters"))]
    pub price: Option<String>,
}

/// Request payload for updating a gift (partial update).
///
/// Every field distinguishes an absent key (unchanged) from an explicit
/// `null`. `description` and `price` are cleared by `null`; `name` and
/// `quantity` are required on a gift, so `null` fails validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGiftRequest {
    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub quantity: Option<Option<i32>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub price: Option<Option<String>>,
}

impl UpdateGiftRequest {
    /// Whether the payload carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }
}

fn with_message(mut err: ValidationError, message: &'static str) -> ValidationError {
    err.message = Some(message.into());
    err
}

impl Validate for UpdateGiftRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.name {
            Some(None) => errors.add(
                "name",
                with_message(ValidationError::new("required"), "Name cannot be null"),
            ),
            Some(Some(name)) => {
                if let Err(err) = validate_not_blank(name) {
                    errors.add("name", err);
                } else if let Err(err) = validate_max_chars(Some(name), MAX_NAME_LENGTH) {
                    errors.add(
                        "name",
                        with_message(err, "Name must be at most 200 characters"),
                    );
                }
            }
            None => {}
        }

        if let Some(description) = &self.description {
            if let Err(err) = validate_max_chars(description.as_deref(), MAX_DESCRIPTION_LENGTH) {
                errors.add(
                    "description",
                    with_message(err, "Description must be at most 2000 characters"),
                );
            }
        }

        match self.quantity {
            Some(None) => errors.add(
                "quantity",
                with_message(ValidationError::new("required"), "Quantity cannot be null"),
            ),
            Some(Some(quantity)) if !(1..=MAX_QUANTITY).contains(&quantity) => errors.add(
                "quantity",
                with_message(
                    ValidationError::new("range"),
                    "Quantity must be between 1 and 10000",
                ),
            ),
            _ => {}
        }

        if let Some(price) = &self.price {
            if let Err(err) = validate_max_chars(price.as_deref(), MAX_PRICE_LENGTH) {
                errors.add(
                    "price",
                    with_message(err, "Price must be at most 50 characters"),
                );
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A gift together with its reservations and the derived quantities.
///
/// Computed fresh on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftWithReservations {
    #[serde(flatten)]
    pub gift: Gift,
    pub reservations: Vec<Reservation>,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
}

/// Availability filter used by the public listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftFilter {
    #[default]
    All,
    /// Gifts with at least one unit left.
    Available,
    /// Gifts with at least one unit reserved.
    Reserved,
}

/// Query parameters for listing gifts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGiftsQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub filter: GiftFilter,
}
