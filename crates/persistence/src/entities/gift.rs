//! Gift entity (stored record layout).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use domain::models::gift::Gift;

/// Stored gift record.
///
/// `id` is the insertion sequence number used for ordering; `gift_id` is the
/// public identifier.
#[derive(Debug, Clone)]
pub struct GiftEntity {
    pub id: i64,
    pub gift_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GiftEntity {
    /// Lays out a domain gift under the given sequence number.
    pub fn from_gift(id: i64, gift: Gift) -> Self {
        Self {
            id,
            gift_id: gift.id,
            name: gift.name,
            description: gift.description,
            quantity: gift.quantity,
            price: gift.price,
            created_at: gift.created_at,
        }
    }
}

impl From<GiftEntity> for Gift {
    fn from(entity: GiftEntity) -> Self {
        Self {
            id: entity.gift_id,
            name: entity.name,
            description: entity.description,
            quantity: entity.quantity,
            price: entity.price,
            created_at: entity.created_at,
        }
    }
}
