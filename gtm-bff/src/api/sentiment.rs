//! Consumer sentiment mining

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content;
use gtm_common::db;
use gtm_common::models::{NewProject, SentimentWithSources};
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{require_fields, ProjectQuery, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineRequest {
    pub category: String,
    /// Search terms typed by the user; the canned miner ignores them
    #[serde(default)]
    pub keywords: Vec<String>,
    pub project_id: String,
}

#[derive(Debug, Serialize)]
pub struct MineResponse {
    pub success: bool,
    pub insights: Vec<SentimentWithSources>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<SentimentWithSources>,
}

/// POST /functions/v1/consumer-sentiment
pub async fn mine_sentiment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<MineRequest>, JsonRejection>,
) -> ApiResult<Json<MineResponse>> {
    let Json(req) = payload?;
    require_fields(&[&req.category])?;
    debug!("Mining sentiment for {:?}", req.keywords);

    let project = db::projects::resolve_project(
        &state.db,
        &user.id,
        ProjectRef::parse(&req.project_id)?,
        NewProject::new(req.category.clone(), "global"),
    )
    .await?;

    let insights = db::sentiment::insert_mined(
        &state.db,
        &project.id,
        &user.id,
        &req.category,
        content::sentiment::mined_insights(),
    )
    .await?;

    info!("Stored {} sentiment insights for project {}", insights.len(), project.id);
    Ok(Json(MineResponse {
        success: true,
        insights,
    }))
}

/// GET /functions/v1/consumer-sentiment?projectId=
pub async fn get_insights(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<InsightsResponse>> {
    let insights = match query.project_ref()? {
        ProjectRef::New => Vec::new(),
        ProjectRef::Id(id) => {
            let project = db::projects::get_owned(&state.db, &user.id, &id).await?;
            db::sentiment::list_with_sources(&state.db, &project.id).await?
        }
    };

    Ok(Json(InsightsResponse { insights }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/consumer-sentiment", FUNCTIONS_PREFIX),
        post(mine_sentiment).get(get_insights),
    )
}
