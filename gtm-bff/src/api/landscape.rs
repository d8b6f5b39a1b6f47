//! Market landscape scan
//!
//! POST starts a project from the scan form and stores the competitor
//! listings found for its category; GET returns what was stored.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content;
use gtm_common::db;
use gtm_common::models::{LandscapeInsight, NewProject, Project};
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{require_fields, ProjectQuery, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub category: String,
    pub geography: String,
    #[serde(default)]
    pub brand: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub project: Project,
    pub insights: Vec<LandscapeInsight>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<LandscapeInsight>,
}

/// POST /functions/v1/market-landscape
pub async fn run_scan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> ApiResult<Json<ScanResponse>> {
    let Json(req) = payload?;
    require_fields(&[&req.category, &req.geography])?;

    let brand = req.brand.filter(|b| !b.trim().is_empty());
    let project = db::projects::create_project(
        &state.db,
        &user.id,
        &NewProject::new(req.category.clone(), req.geography).with_brand(brand),
    )
    .await?;

    let insights = db::landscape::insert_insights(
        &state.db,
        &project.id,
        content::landscape::competitor_listings(&req.category),
    )
    .await?;

    info!(
        "Landscape scan for project {} stored {} listings",
        project.id,
        insights.len()
    );
    Ok(Json(ScanResponse { project, insights }))
}

/// GET /functions/v1/market-landscape?projectId=
pub async fn get_insights(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<InsightsResponse>> {
    let insights = match query.project_ref()? {
        ProjectRef::New => Vec::new(),
        ProjectRef::Id(id) => {
            let project = db::projects::get_owned(&state.db, &user.id, &id).await?;
            db::landscape::list_for_project(&state.db, &project.id).await?
        }
    };

    Ok(Json(InsightsResponse { insights }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/market-landscape", FUNCTIONS_PREFIX),
        post(run_scan).get(get_insights),
    )
}
