//! Channel feasibility matrix

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content;
use gtm_common::db;
use gtm_common::models::ChannelFeasibility;
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::FUNCTIONS_PREFIX;
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityRequest {
    pub project_id: String,
}

#[derive(Debug, Serialize)]
pub struct FeasibilityResponse {
    pub success: bool,
    pub data: Vec<ChannelFeasibility>,
}

/// POST /functions/v1/channel-feasibility
pub async fn score_channels(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<FeasibilityRequest>, JsonRejection>,
) -> ApiResult<Json<FeasibilityResponse>> {
    let Json(req) = payload?;
    let project =
        db::projects::require_existing(&state.db, &user.id, ProjectRef::parse(&req.project_id)?)
            .await?;

    let cells = content::feasibility::scored_grid(&mut rand::thread_rng());
    let data = db::feasibility::insert_grid(&state.db, &project.id, &user.id, cells).await?;

    info!("Scored {} channel cells for project {}", data.len(), project.id);
    Ok(Json(FeasibilityResponse {
        success: true,
        data,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/channel-feasibility", FUNCTIONS_PREFIX),
        post(score_channels),
    )
}
