//! Qualitative research uploads

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::content;
use gtm_common::db::{self, research::ResearchUpload};
use gtm_common::models::{QualResearchInsight, ResearchType};
use gtm_common::uuid_utils::ProjectRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{require_fields, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    pub project_id: String,
    pub research_type: ResearchType,
    #[serde(default)]
    pub file_name: String,
    /// Transcript body; not retained
    #[serde(default)]
    pub file_content: String,
}

#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub success: bool,
    pub insight: QualResearchInsight,
}

/// Reference recorded in place of a stored file
fn file_reference(user_id: &str, file_name: &str) -> String {
    format!("research-files/{}/{}", user_id, file_name)
}

/// POST /functions/v1/qualitative-research
pub async fn analyze_research(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ResearchRequest>, JsonRejection>,
) -> ApiResult<Json<ResearchResponse>> {
    let Json(req) = payload?;
    require_fields(&[&req.file_name])?;

    let project =
        db::projects::require_existing(&state.db, &user.id, ProjectRef::parse(&req.project_id)?)
            .await?;

    let upload = ResearchUpload {
        research_type: req.research_type,
        file_name: &req.file_name,
        file_url: file_reference(&user.id, &req.file_name),
    };
    let insight = db::research::insert_insight(
        &state.db,
        &project.id,
        &user.id,
        upload,
        content::research::transcript_analysis(),
    )
    .await?;

    info!(
        "Analysed {} transcript {} ({} bytes) for project {}",
        req.research_type.as_str(),
        req.file_name,
        req.file_content.len(),
        project.id
    );
    Ok(Json(ResearchResponse {
        success: true,
        insight,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/qualitative-research", FUNCTIONS_PREFIX),
        post(analyze_research),
    )
}
