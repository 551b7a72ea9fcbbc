//! Reservation endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::{repositories::ReservationRepository, StoreError};
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::{record_reservation_created, record_reservation_rejected};
use domain::models::{CreateReservationRequest, NewReservation, Reservation};

/// List every reservation.
///
/// GET /api/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let reservations = ReservationRepository::new(state.store.clone()).list()?;
    Ok(Json(reservations))
}

/// Reserve units of a gift.
///
/// POST /api/reservations
///
/// The availability check and the insert run atomically in the store.
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let Some(input) = NewReservation::from_request(request) else {
        record_reservation_rejected("not_found");
        return Err(ApiError::gift_not_found());
    };

    let reservation = ReservationRepository::new(state.store.clone())
        .reserve(&input)
        .map_err(|err| {
            match &err {
                StoreError::GiftNotFound(_) => record_reservation_rejected("not_found"),
                StoreError::InsufficientAvailability(e) => {
                    record_reservation_rejected("unavailable");
                    warn!(
                        gift_id = %input.gift_id,
                        requested = e.requested,
                        available = e.available,
                        "Reservation exceeds availability"
                    );
                }
                StoreError::LockPoisoned => {}
            }
            ApiError::from(err)
        })?;

    record_reservation_created(reservation.quantity);
    info!(
        reservation_id = %reservation.id,
        gift_id = %reservation.gift_id,
        quantity = reservation.quantity,
        "Gift reserved"
    );

    Ok((StatusCode::CREATED, Json(reservation)))
}
