//! Consumer segments

use crate::content::segments::SegmentTemplate;
use crate::models::Segment;
use crate::uuid_utils;
use crate::Result;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

pub async fn insert_segments(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    templates: Vec<SegmentTemplate>,
) -> Result<Vec<Segment>> {
    let mut tx = db.begin().await?;
    let mut saved = Vec::with_capacity(templates.len());

    for template in templates {
        let segment = Segment {
            id: uuid_utils::generate().to_string(),
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
            name: template.name,
            description: template.description,
            demographics: template.demographics,
            psychographics: template.psychographics,
            behaviors: template.behaviors,
            channels: template.channels,
            positioning: template.positioning,
            tagline: template.tagline,
            messages: template.messages,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO segments
                (id, project_id, user_id, name, description, demographics, psychographics,
                 behaviors, channels, positioning, tagline, messages, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&segment.id)
        .bind(&segment.project_id)
        .bind(&segment.user_id)
        .bind(&segment.name)
        .bind(&segment.description)
        .bind(Json(&segment.demographics))
        .bind(Json(&segment.psychographics))
        .bind(Json(&segment.behaviors))
        .bind(Json(&segment.channels))
        .bind(&segment.positioning)
        .bind(&segment.tagline)
        .bind(Json(&segment.messages))
        .bind(segment.created_at)
        .execute(&mut *tx)
        .await?;

        saved.push(segment);
    }

    tx.commit().await?;
    Ok(saved)
}

pub async fn list_for_project(db: &SqlitePool, project_id: &str) -> Result<Vec<Segment>> {
    let segments = sqlx::query_as::<_, Segment>(
        "SELECT * FROM segments WHERE project_id = ? ORDER BY created_at, rowid",
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    Ok(segments)
}

/// A specific segment, only if it belongs to `project_id`
pub async fn get_in_project(
    db: &SqlitePool,
    project_id: &str,
    segment_id: &str,
) -> Result<Option<Segment>> {
    let segment =
        sqlx::query_as::<_, Segment>("SELECT * FROM segments WHERE id = ? AND project_id = ?")
            .bind(segment_id)
            .bind(project_id)
            .fetch_optional(db)
            .await?;

    Ok(segment)
}

pub async fn first_for_project(db: &SqlitePool, project_id: &str) -> Result<Option<Segment>> {
    let segment = sqlx::query_as::<_, Segment>(
        "SELECT * FROM segments WHERE project_id = ? ORDER BY created_at, rowid LIMIT 1",
    )
    .bind(project_id)
    .fetch_optional(db)
    .await?;

    Ok(segment)
}
