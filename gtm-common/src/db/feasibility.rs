//! Channel feasibility grid rows

use crate::content::feasibility::FeasibilityCell;
use crate::models::ChannelFeasibility;
use crate::uuid_utils;
use crate::Result;
use chrono::Utc;
use sqlx::SqlitePool;

pub async fn insert_grid(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    cells: Vec<FeasibilityCell>,
) -> Result<Vec<ChannelFeasibility>> {
    let mut tx = db.begin().await?;
    let mut saved = Vec::with_capacity(cells.len());

    for cell in cells {
        let row = ChannelFeasibility {
            id: uuid_utils::generate().to_string(),
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
            city_tier: cell.city_tier.to_string(),
            channel: cell.channel.to_string(),
            feasibility_score: cell.score.to_string(),
            rationale: cell.rationale,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO channel_feasibility
                (id, project_id, user_id, city_tier, channel, feasibility_score, rationale, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.project_id)
        .bind(&row.user_id)
        .bind(&row.city_tier)
        .bind(&row.channel)
        .bind(&row.feasibility_score)
        .bind(&row.rationale)
        .bind(row.created_at)
        .execute(&mut *tx)
        .await?;

        saved.push(row);
    }

    tx.commit().await?;
    Ok(saved)
}

pub async fn list_for_project(db: &SqlitePool, project_id: &str) -> Result<Vec<ChannelFeasibility>> {
    let rows = sqlx::query_as::<_, ChannelFeasibility>(
        "SELECT * FROM channel_feasibility WHERE project_id = ? ORDER BY created_at, rowid",
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}
