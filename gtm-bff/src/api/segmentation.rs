//! Consumer segmentation

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content::{self, segments::ProductDetails};
use gtm_common::db;
use gtm_common::models::{NewProject, Segment};
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{require_fields, ProjectQuery, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_form: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub target_consumer: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    pub project_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResponse {
    pub success: bool,
    pub segments: Vec<Segment>,
    /// Differs from the request when a project was created
    pub project_id: String,
}

#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub segments: Vec<Segment>,
}

/// POST /functions/v1/segmentation
pub async fn generate_segments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<SegmentationRequest>, JsonRejection>,
) -> ApiResult<Json<SegmentationResponse>> {
    let Json(req) = payload?;
    require_fields(&[
        &req.product_name,
        &req.product_form,
        &req.price_range,
        &req.ingredients,
    ])?;
    let project_ref = ProjectRef::parse(&req.project_id)?;

    let project = db::projects::resolve_project(
        &state.db,
        &user.id,
        project_ref,
        NewProject::new(req.product_name.clone(), "global"),
    )
    .await?;

    let product = ProductDetails {
        product_name: req.product_name,
        product_form: req.product_form,
        ingredients: req.ingredients,
    };
    let segments = db::segments::insert_segments(
        &state.db,
        &project.id,
        &user.id,
        content::segments::segment_templates(&product),
    )
    .await?;

    info!(
        "Generated {} segments for project {} (channels: {:?}, target: {:?})",
        segments.len(),
        project.id,
        req.channels,
        req.target_consumer
    );
    Ok(Json(SegmentationResponse {
        success: true,
        segments,
        project_id: project.id,
    }))
}

/// GET /functions/v1/segmentation?projectId=
pub async fn get_segments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<SegmentsResponse>> {
    let segments = match query.project_ref()? {
        ProjectRef::New => Vec::new(),
        ProjectRef::Id(id) => {
            let project = db::projects::get_owned(&state.db, &user.id, &id).await?;
            db::segments::list_for_project(&state.db, &project.id).await?
        }
    };

    Ok(Json(SegmentsResponse { segments }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/segmentation", FUNCTIONS_PREFIX),
        post(generate_segments).get(get_segments),
    )
}
