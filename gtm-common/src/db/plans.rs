//! Stored GTM plans

use crate::funnel::GtmPlan;
use crate::models::GtmPlanRecord;
use crate::Result;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Store a generated plan; the plan's id becomes the row id
pub async fn insert_plan(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    plan: GtmPlan,
) -> Result<GtmPlanRecord> {
    let record = GtmPlanRecord {
        id: plan.id,
        project_id: project_id.to_string(),
        user_id: user_id.to_string(),
        name: plan.name,
        description: plan.description,
        awareness_strategies: plan.awareness_strategies,
        consideration_strategies: plan.consideration_strategies,
        conversion_strategies: plan.conversion_strategies,
        loyalty_strategies: plan.loyalty_strategies,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO gtm_plans
            (id, project_id, user_id, name, description, awareness_strategies,
             consideration_strategies, conversion_strategies, loyalty_strategies, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.project_id)
    .bind(&record.user_id)
    .bind(&record.name)
    .bind(&record.description)
    .bind(Json(&record.awareness_strategies))
    .bind(Json(&record.consideration_strategies))
    .bind(Json(&record.conversion_strategies))
    .bind(Json(&record.loyalty_strategies))
    .bind(record.created_at)
    .execute(db)
    .await?;

    Ok(record)
}

pub async fn latest_for_project(db: &SqlitePool, project_id: &str) -> Result<Option<GtmPlanRecord>> {
    let plan = sqlx::query_as::<_, GtmPlanRecord>(
        "SELECT * FROM gtm_plans WHERE project_id = ? ORDER BY created_at DESC, rowid DESC LIMIT 1",
    )
    .bind(project_id)
    .fetch_optional(db)
    .await?;

    Ok(plan)
}
