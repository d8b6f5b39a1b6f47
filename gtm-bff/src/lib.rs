//! gtm-bff library - backend-for-frontend handlers for GTM Kit
//!
//! One route per module action under `/functions/v1/`. Every one of them
//! requires a bearer token; `/health` and `/build_info` do not.

use axum::Router;
use gtm_common::auth::TokenVerifier;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Resolves bearer tokens to users
    pub verifier: Arc<dyn TokenVerifier>,
    /// Expected `apikey` header value (unset = not checked)
    pub public_api_key: Option<String>,
    /// Service start time (for uptime reporting)
    pub startup_time: Instant,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        verifier: Arc<dyn TokenVerifier>,
        public_api_key: Option<String>,
    ) -> Self {
        Self {
            db,
            verifier,
            public_api_key,
            startup_time: Instant::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;

    let protected = Router::new()
        .merge(api::landscape::routes())
        .merge(api::sentiment::routes())
        .merge(api::segmentation::routes())
        .merge(api::brand_vision::routes())
        .merge(api::packaging::routes())
        .merge(api::gtm_plan::routes())
        .merge(api::creative_brief::routes())
        .merge(api::research::routes())
        .merge(api::feasibility::routes())
        .merge(api::projects::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    let public = Router::new().merge(api::health_routes());

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
