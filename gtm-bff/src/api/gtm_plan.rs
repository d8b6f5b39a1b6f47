//! GTM plan generation, retrieval and CSV export

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content;
use gtm_common::context::load_insights;
use gtm_common::db;
use gtm_common::funnel::{FunnelBoard, GtmPlan};
use gtm_common::models::{GtmPlanRecord, NewProject, ProjectInsights};
use gtm_common::uuid_utils::{self, ProjectRef};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{require_fields, ProjectQuery, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    pub success: bool,
    pub plan: GtmPlanRecord,
    pub insights: ProjectInsights,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Option<GtmPlanRecord>,
}

/// POST /functions/v1/gtm-plan
pub async fn generate_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> ApiResult<Json<GeneratePlanResponse>> {
    let Json(req) = payload?;
    require_fields(&[&req.name])?;

    let project = db::projects::resolve_project(
        &state.db,
        &user.id,
        ProjectRef::parse_optional(req.project_id.as_deref())?,
        NewProject::new("default", "global"),
    )
    .await?;

    let insights = load_insights(&state.db, &project.id).await?;

    let plan = content::gtm::starter_plan(
        uuid_utils::generate().to_string(),
        req.name,
        req.description,
    );
    let plan = db::plans::insert_plan(&state.db, &project.id, &user.id, plan).await?;

    info!("Generated GTM plan {} for project {}", plan.id, project.id);
    Ok(Json(GeneratePlanResponse {
        success: true,
        plan,
        insights,
    }))
}

/// GET /functions/v1/gtm-plan?projectId=
pub async fn get_plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = match query.project_ref()? {
        ProjectRef::New => None,
        ProjectRef::Id(id) => {
            let project = db::projects::get_owned(&state.db, &user.id, &id).await?;
            db::plans::latest_for_project(&state.db, &project.id).await?
        }
    };

    Ok(Json(PlanResponse { plan }))
}

/// POST /functions/v1/gtm-plan/export
///
/// Body is the plan as currently arranged on the canvas (edits are not
/// stored server-side, so the client sends what it shows).
pub async fn export_plan(payload: Result<Json<GtmPlan>, JsonRejection>) -> ApiResult<Response> {
    let Json(plan) = payload?;
    let board = FunnelBoard::new(plan);

    let disposition = format!("attachment; filename=\"{}\"", board.export_file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv;charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        board.export_csv(),
    )
        .into_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/gtm-plan", FUNCTIONS_PREFIX),
            post(generate_plan).get(get_plan),
        )
        .route(
            &format!("{}/gtm-plan/export", FUNCTIONS_PREFIX),
            post(export_plan),
        )
}
