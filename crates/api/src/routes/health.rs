//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::{StoreError, StoreStats};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: StoreHealth,
}

/// Store health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreHealth {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gifts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<usize>,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check.
///
/// 503 when the store lock has been poisoned.
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let stats = state.store.stats();
    let (status, store) = match stats {
        Ok(stats) => (
            StatusCode::OK,
            StoreHealth {
                available: true,
                gifts: Some(stats.gifts),
                reservations: Some(stats.reservations),
            },
        ),
        Err(err) => {
            tracing::error!(error = %err, "Store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                StoreHealth {
                    available: false,
                    gifts: None,
                    reservations: None,
                },
            )
        }
    };

    let response = HealthResponse {
        status: if store.available { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
    };

    (status, Json(response))
}

/// Liveness probe. 200 while the process runs.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe. 200 when the store can serve requests.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    readiness(state.store.stats())
}

fn readiness(stats: Result<StoreStats, StoreError>) -> Result<Json<StatusResponse>, ApiError> {
    match stats {
        Ok(_) => Ok(Json(StatusResponse {
            status: "ready".to_string(),
        })),
        Err(err) => {
            tracing::error!(error = %err, "Store unavailable");
            Err(ApiError::ServiceUnavailable("Store unavailable".into()))
        }
    }
}
