//! Admin dashboard summary.

use axum::{extract::State, Json};
use persistence::repositories::GiftRepository;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::RegistrySummary;

/// GET /api/summary
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<RegistrySummary>, ApiError> {
    let views = GiftRepository::new(state.store.clone()).list_with_reservations()?;
    Ok(Json(RegistrySummary::from_views(&views)))
}
