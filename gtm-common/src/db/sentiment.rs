//! Consumer sentiment insights and their source reviews

use crate::content::sentiment::SentimentTemplate;
use crate::models::{SentimentInsight, SentimentSource, SentimentWithSources};
use crate::uuid_utils;
use crate::Result;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;
use std::collections::HashMap;

pub async fn insert_mined(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    category: &str,
    templates: Vec<SentimentTemplate>,
) -> Result<Vec<SentimentWithSources>> {
    let mut tx = db.begin().await?;
    let mut saved = Vec::with_capacity(templates.len());

    for template in templates {
        let insight = SentimentInsight {
            id: uuid_utils::generate().to_string(),
            project_id: project_id.to_string(),
            user_id: user_id.to_string(),
            category: category.to_string(),
            insight_type: template.insight_type.to_string(),
            sentiment: template.sentiment.to_string(),
            content: template.content.to_string(),
            keywords: template.keywords.iter().map(|k| k.to_string()).collect(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO consumer_sentiment
                (id, project_id, user_id, category, insight_type, sentiment,
                 content, keywords, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&insight.id)
        .bind(&insight.project_id)
        .bind(&insight.user_id)
        .bind(&insight.category)
        .bind(&insight.insight_type)
        .bind(&insight.sentiment)
        .bind(&insight.content)
        .bind(Json(&insight.keywords))
        .bind(insight.created_at)
        .execute(&mut *tx)
        .await?;

        let source = SentimentSource {
            id: uuid_utils::generate().to_string(),
            sentiment_id: insight.id.clone(),
            source_type: template.source.source_type.to_string(),
            source_url: template.source.source_url.to_string(),
            source_text: template.source.source_text.to_string(),
        };

        sqlx::query(
            r#"
            INSERT INTO sentiment_sources (id, sentiment_id, source_type, source_url, source_text)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&source.id)
        .bind(&source.sentiment_id)
        .bind(&source.source_type)
        .bind(&source.source_url)
        .bind(&source.source_text)
        .execute(&mut *tx)
        .await?;

        saved.push(SentimentWithSources {
            insight,
            sentiment_sources: vec![source],
        });
    }

    tx.commit().await?;
    Ok(saved)
}

/// Insights for a project, each with its sources attached
pub async fn list_with_sources(
    db: &SqlitePool,
    project_id: &str,
) -> Result<Vec<SentimentWithSources>> {
    let insights = sqlx::query_as::<_, SentimentInsight>(
        "SELECT * FROM consumer_sentiment WHERE project_id = ? ORDER BY created_at, rowid",
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    let sources = sqlx::query_as::<_, SentimentSource>(
        r#"
        SELECT s.*
        FROM sentiment_sources s
        JOIN consumer_sentiment c ON c.id = s.sentiment_id
        WHERE c.project_id = ?
        ORDER BY s.rowid
        "#,
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    let mut by_insight: HashMap<String, Vec<SentimentSource>> = HashMap::new();
    for source in sources {
        by_insight
            .entry(source.sentiment_id.clone())
            .or_default()
            .push(source);
    }

    Ok(insights
        .into_iter()
        .map(|insight| SentimentWithSources {
            sentiment_sources: by_insight.remove(&insight.id).unwrap_or_default(),
            insight,
        })
        .collect())
}
