//! HTTP API handlers for gtm-bff

pub mod auth;
pub mod brand_vision;
pub mod creative_brief;
pub mod feasibility;
pub mod gtm_plan;
pub mod health;
pub mod landscape;
pub mod packaging;
pub mod projects;
pub mod research;
pub mod segmentation;
pub mod sentiment;

pub use auth::auth_middleware;
pub use health::health_routes;

use crate::{ApiError, ApiResult};
use gtm_common::uuid_utils::{self, ProjectRef};
use serde::Deserialize;
use uuid::Uuid;

/// Route prefix shared by every module action
pub const FUNCTIONS_PREFIX: &str = "/functions/v1";

/// `?projectId=` query for GET handlers
#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,
}

impl ProjectQuery {
    /// The project reference; a missing parameter is a 400
    pub fn project_ref(&self) -> ApiResult<ProjectRef> {
        let raw = self
            .project_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Project ID is required".to_string()))?;
        Ok(ProjectRef::parse(raw)?)
    }
}

/// Parse a record id taken from the URL path
pub(crate) fn path_id(raw: &str) -> ApiResult<Uuid> {
    uuid_utils::parse(raw).map_err(|_| ApiError::BadRequest("Invalid ID format".to_string()))
}

/// Reject blank required text fields with a generic message
pub(crate) fn require_fields(fields: &[&str]) -> ApiResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    }
    Ok(())
}
