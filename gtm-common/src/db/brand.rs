//! Brand vision (one per project)

use crate::models::BrandVision;
use crate::uuid_utils;
use crate::{Error, Result};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Editable fields of a brand vision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionFields {
    pub mission: String,
    pub tone: String,
    pub communication_dos: Vec<String>,
    pub communication_donts: Vec<String>,
}

pub async fn get_for_project(db: &SqlitePool, project_id: &str) -> Result<Option<BrandVision>> {
    let vision = sqlx::query_as::<_, BrandVision>("SELECT * FROM brand_vision WHERE project_id = ?")
        .bind(project_id)
        .fetch_optional(db)
        .await?;

    Ok(vision)
}

/// Insert the project's vision or overwrite the existing one
///
/// The row id and `created_at` survive an overwrite; `updated_at` moves.
pub async fn upsert(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    fields: &VisionFields,
) -> Result<BrandVision> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO brand_vision
            (id, project_id, user_id, mission, tone, communication_dos,
             communication_donts, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(project_id) DO UPDATE SET
            user_id = excluded.user_id,
            mission = excluded.mission,
            tone = excluded.tone,
            communication_dos = excluded.communication_dos,
            communication_donts = excluded.communication_donts,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(uuid_utils::generate().to_string())
    .bind(project_id)
    .bind(user_id)
    .bind(&fields.mission)
    .bind(&fields.tone)
    .bind(Json(&fields.communication_dos))
    .bind(Json(&fields.communication_donts))
    .bind(now)
    .bind(now)
    .execute(db)
    .await?;

    get_for_project(db, project_id)
        .await?
        .ok_or_else(|| Error::Internal("brand vision missing after upsert".to_string()))
}
