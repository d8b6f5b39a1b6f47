//! Database initialization
//!
//! Opens (creating if needed) the SQLite file and runs idempotent
//! `CREATE TABLE IF NOT EXISTS` statements for every table.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Open the database at `db_path` and make sure the schema exists
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// In-memory database with the full schema
///
/// Each connection to `sqlite::memory:` sees its own database, so the pool
/// is capped at a single connection.
pub async fn open_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
    create_schema(&pool).await?;

    Ok(pool)
}

/// Create every table (safe to call repeatedly)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_users_table(pool).await?;
    create_auth_tokens_table(pool).await?;
    create_projects_table(pool).await?;

    create_landscape_insights_table(pool).await?;
    create_consumer_sentiment_table(pool).await?;
    create_sentiment_sources_table(pool).await?;
    create_segments_table(pool).await?;
    create_brand_vision_table(pool).await?;
    create_gtm_plans_table(pool).await?;
    create_creative_briefs_table(pool).await?;
    create_packaging_reviews_table(pool).await?;
    create_qual_research_insights_table(pool).await?;
    create_channel_feasibility_table(pool).await?;

    Ok(())
}

async fn create_users_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_auth_tokens_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS auth_tokens (
            token_digest TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_auth_tokens_user ON auth_tokens(user_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_projects_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            category TEXT NOT NULL,
            geography TEXT NOT NULL,
            brand TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_user ON projects(user_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_landscape_insights_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS landscape_insights (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            competitor_name TEXT NOT NULL,
            product_name TEXT NOT NULL,
            price REAL NOT NULL,
            pack_size TEXT NOT NULL,
            claims TEXT NOT NULL DEFAULT '[]',
            listing_url TEXT NOT NULL,
            platform TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_landscape_project ON landscape_insights(project_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_consumer_sentiment_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS consumer_sentiment (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            category TEXT NOT NULL,
            insight_type TEXT NOT NULL CHECK (insight_type IN ('buying_driver', 'objection')),
            sentiment TEXT NOT NULL CHECK (sentiment IN ('positive', 'negative', 'neutral')),
            content TEXT NOT NULL,
            keywords TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_sentiment_project ON consumer_sentiment(project_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_sentiment_sources_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sentiment_sources (
            id TEXT PRIMARY KEY,
            sentiment_id TEXT NOT NULL REFERENCES consumer_sentiment(id) ON DELETE CASCADE,
            source_type TEXT NOT NULL,
            source_url TEXT NOT NULL,
            source_text TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_segments_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS segments (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            demographics TEXT NOT NULL DEFAULT '[]',
            psychographics TEXT NOT NULL DEFAULT '[]',
            behaviors TEXT NOT NULL DEFAULT '[]',
            channels TEXT NOT NULL DEFAULT '[]',
            positioning TEXT NOT NULL,
            tagline TEXT NOT NULL,
            messages TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_segments_project ON segments(project_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_brand_vision_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS brand_vision (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL UNIQUE REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            mission TEXT NOT NULL,
            tone TEXT NOT NULL,
            communication_dos TEXT NOT NULL DEFAULT '[]',
            communication_donts TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_gtm_plans_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS gtm_plans (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            awareness_strategies TEXT NOT NULL DEFAULT '[]',
            consideration_strategies TEXT NOT NULL DEFAULT '[]',
            conversion_strategies TEXT NOT NULL DEFAULT '[]',
            loyalty_strategies TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_gtm_plans_project ON gtm_plans(project_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_creative_briefs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS creative_briefs (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            version INTEGER NOT NULL,
            objective TEXT NOT NULL,
            target_segment TEXT NOT NULL,
            key_messages TEXT NOT NULL DEFAULT '[]',
            mandatory_claims TEXT NOT NULL DEFAULT '[]',
            tone_voice TEXT NOT NULL,
            visual_ideas TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            UNIQUE (project_id, version)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_packaging_reviews_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS packaging_reviews (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL UNIQUE REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            front_image_url TEXT,
            back_image_url TEXT,
            scanned_text TEXT NOT NULL DEFAULT '',
            claims TEXT NOT NULL DEFAULT '[]',
            readability_score INTEGER NOT NULL,
            clutter_score INTEGER NOT NULL,
            compliance_issues TEXT NOT NULL DEFAULT '[]',
            recommendations TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_qual_research_insights_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS qual_research_insights (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            research_type TEXT NOT NULL CHECK (research_type IN ('fgd', 'di', 'expert_interview')),
            file_name TEXT NOT NULL,
            file_url TEXT NOT NULL,
            themes TEXT NOT NULL DEFAULT '[]',
            key_quotes TEXT NOT NULL DEFAULT '[]',
            sentiment TEXT NOT NULL,
            barriers TEXT NOT NULL DEFAULT '[]',
            drivers TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_channel_feasibility_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS channel_feasibility (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            city_tier TEXT NOT NULL,
            channel TEXT NOT NULL,
            feasibility_score TEXT NOT NULL CHECK (feasibility_score IN ('High', 'Medium', 'Low')),
            rationale TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_feasibility_project ON channel_feasibility(project_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
