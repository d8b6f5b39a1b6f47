//! Brand vision (one per project, saved by upsert)

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::db::{self, brand::VisionFields};
use gtm_common::models::{BrandVision, NewProject};
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ProjectQuery, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVisionRequest {
    pub project_id: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub communication_dos: Vec<String>,
    #[serde(default)]
    pub communication_donts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VisionResponse {
    pub vision: Option<BrandVision>,
}

/// GET /functions/v1/brand-vision?projectId=
pub async fn get_vision(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<VisionResponse>> {
    let vision = match query.project_ref()? {
        ProjectRef::New => None,
        ProjectRef::Id(id) => {
            let project = db::projects::get_owned(&state.db, &user.id, &id).await?;
            db::brand::get_for_project(&state.db, &project.id).await?
        }
    };

    Ok(Json(VisionResponse { vision }))
}

/// POST /functions/v1/brand-vision
pub async fn save_vision(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<SaveVisionRequest>, JsonRejection>,
) -> ApiResult<Json<VisionResponse>> {
    let Json(req) = payload?;

    let project = db::projects::resolve_project(
        &state.db,
        &user.id,
        ProjectRef::parse(&req.project_id)?,
        NewProject::new("default", "global"),
    )
    .await?;

    let fields = VisionFields {
        mission: req.mission,
        tone: req.tone,
        communication_dos: req.communication_dos,
        communication_donts: req.communication_donts,
    };
    let vision = db::brand::upsert(&state.db, &project.id, &user.id, &fields).await?;

    info!("Saved brand vision for project {}", project.id);
    Ok(Json(VisionResponse {
        vision: Some(vision),
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/brand-vision", FUNCTIONS_PREFIX),
        get(get_vision).post(save_vision),
    )
}
