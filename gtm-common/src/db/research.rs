//! Qualitative research insights

use crate::content::research::ResearchAnalysis;
use crate::models::{QualResearchInsight, ResearchType};
use crate::uuid_utils;
use crate::Result;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Uploaded transcript being recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchUpload<'a> {
    pub research_type: ResearchType,
    pub file_name: &'a str,
    pub file_url: String,
}

pub async fn insert_insight(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    upload: ResearchUpload<'_>,
    analysis: ResearchAnalysis,
) -> Result<QualResearchInsight> {
    let insight = QualResearchInsight {
        id: uuid_utils::generate().to_string(),
        project_id: project_id.to_string(),
        user_id: user_id.to_string(),
        research_type: upload.research_type.as_str().to_string(),
        file_name: upload.file_name.to_string(),
        file_url: upload.file_url,
        themes: analysis.themes,
        key_quotes: analysis.key_quotes,
        sentiment: analysis.sentiment,
        barriers: analysis.barriers,
        drivers: analysis.drivers,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO qual_research_insights
            (id, project_id, user_id, research_type, file_name, file_url, themes,
             key_quotes, sentiment, barriers, drivers, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&insight.id)
    .bind(&insight.project_id)
    .bind(&insight.user_id)
    .bind(&insight.research_type)
    .bind(&insight.file_name)
    .bind(&insight.file_url)
    .bind(Json(&insight.themes))
    .bind(Json(&insight.key_quotes))
    .bind(&insight.sentiment)
    .bind(Json(&insight.barriers))
    .bind(Json(&insight.drivers))
    .bind(insight.created_at)
    .execute(db)
    .await?;

    Ok(insight)
}
