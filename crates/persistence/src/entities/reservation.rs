//! Reservation entity (stored record layout).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use domain::models::reservation::Reservation;

/// Stored reservation record.
#[derive(Debug, Clone)]
pub struct ReservationEntity {
    pub id: i64,
    pub reservation_id: Uuid,
    pub gift_id: Uuid,
    pub reserved_by: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationEntity> for Reservation {
    fn from(entity: ReservationEntity) -> Self {
        Self {
            id: entity.reservation_id,
            gift_id: entity.gift_id,
            reserved_by: entity.reserved_by,
            quantity: entity.quantity,
            created_at: entity.created_at,
        }
    }
}
