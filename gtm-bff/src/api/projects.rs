//! Project list, context and duplication (sidebar)

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use gtm_common::auth::AuthUser;
use gtm_common::context::{load_context, ProjectContext};
use gtm_common::db;
use gtm_common::models::Project;
use serde::Serialize;
use tracing::info;

use super::{path_id, FUNCTIONS_PREFIX};
use crate::{ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

/// GET /functions/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<ProjectsResponse>> {
    let projects = db::projects::list_projects(&state.db, &user.id).await?;
    Ok(Json(ProjectsResponse { projects }))
}

/// GET /functions/v1/projects/:id
pub async fn get_project_context(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectContext>> {
    let id = path_id(&id)?;
    let context = load_context(&state.db, &user.id, &id).await?;
    Ok(Json(context))
}

/// POST /functions/v1/projects/:id/duplicate
pub async fn duplicate_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let id = path_id(&id)?;
    let project = db::projects::duplicate_project(&state.db, &user.id, &id).await?;
    info!("Duplicated project {} into {}", id, project.id);
    Ok(Json(ProjectResponse { project }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&format!("{}/projects", FUNCTIONS_PREFIX), get(list_projects))
        .route(
            &format!("{}/projects/:id", FUNCTIONS_PREFIX),
            get(get_project_context),
        )
        .route(
            &format!("{}/projects/:id/duplicate", FUNCTIONS_PREFIX),
            post(duplicate_project),
        )
}
