//! Packaging analysis
//!
//! Each call analyses one side of the pack. The project keeps a single
//! review; front and back images land in their own columns.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content;
use gtm_common::db;
use gtm_common::models::{ImageSide, PackagingReview};
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{require_fields, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub project_id: String,
    pub image_type: ImageSide,
    #[serde(default)]
    pub image_url: String,
    /// Text read off the image by the client
    #[serde(default)]
    pub scanned_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub review: PackagingReview,
}

/// POST /functions/v1/packaging-analysis
pub async fn analyze_packaging(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResponse>> {
    let Json(req) = payload?;
    require_fields(&[&req.image_url])?;

    let project =
        db::projects::require_existing(&state.db, &user.id, ProjectRef::parse(&req.project_id)?)
            .await?;

    let review = db::packaging::upsert_review(
        &state.db,
        &project.id,
        &user.id,
        req.image_type,
        &req.image_url,
        &req.scanned_text,
        &content::packaging::review_findings(),
    )
    .await?;

    info!(
        "Packaging review for project {} updated ({:?} image)",
        project.id, req.image_type
    );
    Ok(Json(AnalysisResponse {
        success: true,
        review,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/packaging-analysis", FUNCTIONS_PREFIX),
        post(analyze_packaging),
    )
}
