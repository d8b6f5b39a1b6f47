//! Creative briefs
//!
//! A brief needs a segment, the brand vision and a GTM plan for the
//! project. Each generation stores a new version; edits rewrite one
//! section of an existing version.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::brief::{brief_file_name, brief_text, draft_brief, BriefEdit};
use gtm_common::db;
use gtm_common::models::CreativeBrief;
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{path_id, ProjectQuery, FUNCTIONS_PREFIX};
use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefRequest {
    pub project_id: String,
    #[serde(default)]
    pub segment_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateBriefResponse {
    pub success: bool,
    pub brief: CreativeBrief,
}

#[derive(Debug, Serialize)]
pub struct BriefResponse {
    pub brief: Option<CreativeBrief>,
}

fn missing(what: &str) -> ApiError {
    ApiError::BadRequest(format!("{} is required before generating a brief", what))
}

/// POST /functions/v1/creative-brief
pub async fn generate_brief(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<BriefRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateBriefResponse>> {
    let Json(req) = payload?;
    let project =
        db::projects::require_existing(&state.db, &user.id, ProjectRef::parse(&req.project_id)?)
            .await?;

    let segment = match req.segment_id.as_deref().filter(|s| !s.is_empty()) {
        Some(segment_id) => db::segments::get_in_project(&state.db, &project.id, segment_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Segment {} not found", segment_id)))?,
        None => db::segments::first_for_project(&state.db, &project.id)
            .await?
            .ok_or_else(|| missing("A segment"))?,
    };
    let vision = db::brand::get_for_project(&state.db, &project.id)
        .await?
        .ok_or_else(|| missing("A brand vision"))?;
    let plan = db::plans::latest_for_project(&state.db, &project.id)
        .await?
        .ok_or_else(|| missing("A GTM plan"))?;

    let version = db::briefs::next_version(&state.db, &project.id).await?;
    let brief = draft_brief(&user.id, version, &segment, &vision, &plan);
    db::briefs::insert_brief(&state.db, &brief).await?;

    info!("Creative brief v{} created for project {}", brief.version, project.id);
    Ok(Json(GenerateBriefResponse {
        success: true,
        brief,
    }))
}

/// GET /functions/v1/creative-brief?projectId=
pub async fn get_latest_brief(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<BriefResponse>> {
    let brief = match query.project_ref()? {
        ProjectRef::New => None,
        ProjectRef::Id(id) => {
            let project = db::projects::get_owned(&state.db, &user.id, &id).await?;
            db::briefs::latest_for_project(&state.db, &project.id).await?
        }
    };

    Ok(Json(BriefResponse { brief }))
}

/// PATCH /functions/v1/creative-brief/:id
pub async fn edit_brief(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<BriefEdit>, JsonRejection>,
) -> ApiResult<Json<BriefResponse>> {
    let id = path_id(&id)?;
    let Json(edit) = payload?;

    let mut brief = db::briefs::get_owned(&state.db, &user.id, &id.to_string()).await?;
    if edit.apply(&mut brief) {
        db::briefs::update_sections(&state.db, &brief).await?;
        info!("Creative brief {} updated", brief.id);
    } else {
        debug!("Creative brief {} edit changed nothing", brief.id);
    }

    Ok(Json(BriefResponse { brief: Some(brief) }))
}

/// GET /functions/v1/creative-brief/:id/download
pub async fn download_brief(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = path_id(&id)?;
    let brief = db::briefs::get_owned(&state.db, &user.id, &id.to_string()).await?;

    let disposition = format!("attachment; filename=\"{}\"", brief_file_name(&brief));
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain;charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        brief_text(&brief),
    )
        .into_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/creative-brief", FUNCTIONS_PREFIX),
            post(generate_brief).get(get_latest_brief),
        )
        .route(
            &format!("{}/creative-brief/:id", FUNCTIONS_PREFIX),
            patch(edit_brief),
        )
        .route(
            &format!("{}/creative-brief/:id/download", FUNCTIONS_PREFIX),
            get(download_brief),
        )
}
