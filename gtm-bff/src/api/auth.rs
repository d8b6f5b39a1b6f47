//! Authentication middleware
//!
//! Checks the public `apikey` header (when one is configured), then resolves
//! the bearer token through the state's [`TokenVerifier`]. The resolved
//! [`AuthUser`] is placed in the request extensions for handlers.
//!
//! [`TokenVerifier`]: gtm_common::auth::TokenVerifier

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use gtm_common::auth::{parse_bearer, AuthUser};
use tracing::warn;

use crate::{ApiError, AppState};

/// Header carrying the public (anon) API key
pub const API_KEY_HEADER: &str = "apikey";

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.public_api_key.as_deref() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected) {
            warn!("Rejected request to {}: bad API key", request.uri().path());
            return Err(ApiError::Unauthorized("Invalid API key".to_string()));
        }
    }

    let path = request.uri().path().to_string();
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let verified = match parse_bearer(header.as_deref()) {
        Ok(token) => state.verifier.verify(token).await,
        Err(e) => Err(e),
    };
    let user: AuthUser = verified.map_err(|e| {
        warn!("Rejected request to {}: {}", path, e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
