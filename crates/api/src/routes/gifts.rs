//! Gift endpoint handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{GiftRepository, ReservationRepository};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_gift_created;
use domain::models::{
    CreateGiftRequest, Gift, GiftWithReservations, ListGiftsQuery, Reservation, UpdateGiftRequest,
};

/// Parses a path identifier. Anything that is not a UUID names no gift.
pub(crate) fn parse_gift_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::gift_not_found())
}

/// List gifts with their reservations and derived quantities.
///
/// GET /api/gifts?search=<text>&filter=all|available|reserved
pub async fn list_gifts(
    State(state): State<AppState>,
    query: Result<Query<ListGiftsQuery>, QueryRejection>,
) -> Result<Json<Vec<GiftWithReservations>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;

    let views = GiftRepository::new(state.store.clone()).list_with_reservations()?;
    Ok(Json(query.apply(views)))
}

/// Get a single gift with its reservations.
///
/// GET /api/gifts/:id
pub async fn get_gift(
    State(state): State<AppState>,
    Path(gift_id): Path<String>,
) -> Result<Json<GiftWithReservations>, ApiError> {
    let gift_id = parse_gift_id(&gift_id)?;

    GiftRepository::new(state.store.clone())
        .find_with_reservations(gift_id)?
        .map(Json)
        .ok_or_else(ApiError::gift_not_found)
}

/// Create a gift.
///
/// POST /api/gifts
pub async fn create_gift(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGiftRequest>,
) -> Result<(StatusCode, Json<Gift>), ApiError> {
    let gift = GiftRepository::new(state.store.clone()).create(&request)?;

    record_gift_created();
    info!(
        gift_id = %gift.id,
        name = %gift.name,
        quantity = gift.quantity,
        "Gift created"
    );

    Ok((StatusCode::CREATED, Json(gift)))
}

/// Partially update a gift.
///
/// PUT /api/gifts/:id
pub async fn update_gift(
    State(state): State<AppState>,
    Path(gift_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGiftRequest>,
) -> Result<Json<Gift>, ApiError> {
    let gift_id = parse_gift_id(&gift_id)?;
    let repo = GiftRepository::new(state.store.clone());

    if request.is_empty() {
        return repo
            .find_by_id(gift_id)?
            .map(Json)
            .ok_or_else(ApiError::gift_not_found);
    }

    let gift = repo
        .update(gift_id, request)?
        .ok_or_else(ApiError::gift_not_found)?;

    info!(gift_id = %gift.id, quantity = gift.quantity, "Gift updated");

    Ok(Json(gift))
}

/// Delete a gift and its reservations.
///
/// DELETE /api/gifts/:id
pub async fn delete_gift(
    State(state): State<AppState>,
    Path(gift_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let gift_id = parse_gift_id(&gift_id)?;

    if !GiftRepository::new(state.store.clone()).delete(gift_id)? {
        return Err(ApiError::gift_not_found());
    }

    info!(gift_id = %gift_id, "Gift deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// List the reservations of one gift.
///
/// GET /api/gifts/:id/reservations
pub async fn list_gift_reservations(
    State(state): State<AppState>,
    Path(gift_id): Path<String>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let gift_id = parse_gift_id(&gift_id)?;

    if GiftRepository::new(state.store.clone())
        .find_by_id(gift_id)?
        .is_none()
    {
        return Err(ApiError::gift_not_found());
    }

    let reservations = ReservationRepository::new(state.store.clone()).find_by_gift_id(gift_id)?;
    Ok(Json(reservations))
}
