//! Creative briefs (versioned per project)

use crate::models::CreativeBrief;
use crate::{Error, Result};
use sqlx::types::Json;
use sqlx::SqlitePool;

/// One past the highest stored version, starting at 1
pub async fn next_version(db: &SqlitePool, project_id: &str) -> Result<i64> {
    let latest: Option<i64> =
        sqlx::query_scalar("SELECT MAX(version) FROM creative_briefs WHERE project_id = ?")
            .bind(project_id)
            .fetch_one(db)
            .await?;

    Ok(latest.unwrap_or(0) + 1)
}

pub async fn insert_brief(db: &SqlitePool, brief: &CreativeBrief) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO creative_briefs
            (id, project_id, user_id, version, objective, target_segment, key_messages,
             mandatory_claims, tone_voice, visual_ideas, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&brief.id)
    .bind(&brief.project_id)
    .bind(&brief.user_id)
    .bind(brief.version)
    .bind(&brief.objective)
    .bind(Json(&brief.target_segment))
    .bind(Json(&brief.key_messages))
    .bind(Json(&brief.mandatory_claims))
    .bind(Json(&brief.tone_voice))
    .bind(Json(&brief.visual_ideas))
    .bind(brief.created_at)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn latest_for_project(db: &SqlitePool, project_id: &str) -> Result<Option<CreativeBrief>> {
    let brief = sqlx::query_as::<_, CreativeBrief>(
        "SELECT * FROM creative_briefs WHERE project_id = ? ORDER BY version DESC LIMIT 1",
    )
    .bind(project_id)
    .fetch_optional(db)
    .await?;

    Ok(brief)
}

/// A brief on one of the user's projects
pub async fn get_owned(db: &SqlitePool, user_id: &str, brief_id: &str) -> Result<CreativeBrief> {
    sqlx::query_as::<_, CreativeBrief>(
        r#"
        SELECT b.*
        FROM creative_briefs b
        JOIN projects p ON p.id = b.project_id
        WHERE b.id = ? AND p.user_id = ?
        "#,
    )
    .bind(brief_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| Error::NotFound(format!("Creative brief {} not found", brief_id)))
}

/// Write back every editable section
pub async fn update_sections(db: &SqlitePool, brief: &CreativeBrief) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE creative_briefs SET
            objective = ?,
            target_segment = ?,
            key_messages = ?,
            mandatory_claims = ?,
            tone_voice = ?,
            visual_ideas = ?
        WHERE id = ?
        "#,
    )
    .bind(&brief.objective)
    .bind(Json(&brief.target_segment))
    .bind(Json(&brief.key_messages))
    .bind(Json(&brief.mandatory_claims))
    .bind(Json(&brief.tone_voice))
    .bind(Json(&brief.visual_ideas))
    .bind(&brief.id)
    .execute(db)
    .await?;

    Ok(())
}
