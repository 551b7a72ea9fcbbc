use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use persistence::RegistryStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{gifts, health, reservations, summary};

#[derive(Clone)]
pub struct AppState {
    pub store: RegistryStore,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: RegistryStore) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        store,
        config: config.clone(),
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Visitors browse and reserve without credentials
    let public_routes = Router::new()
        .route("/api/gifts", get(gifts::list_gifts))
        .route("/api/gifts/:id", get(gifts::get_gift))
        .route(
            "/api/reservations",
            post(reservations::create_reservation),
        )
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Gift management and reservation lists; gated by X-Admin-Key
    let admin_routes = Router::new()
        .route("/api/gifts", post(gifts::create_gift))
        .route(
            "/api/gifts/:id",
            put(gifts::update_gift).delete(gifts::delete_gift),
        )
        .route(
            "/api/gifts/:id/reservations",
            get(gifts::list_gift_reservations),
        )
        .route("/api/reservations", get(reservations::list_reservations))
        .route("/api/summary", get(summary::get_summary))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
