//! Project context shared by every project-scoped view
//!
//! A view resolves its [`ProjectContext`] once: the project row plus which
//! modules already hold data. Progress flags come from a single query.

use crate::models::{Project, ProjectInsights};
use serde::{Deserialize, Serialize};

/// Completion flag per sidebar module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ModuleProgress {
    pub landscape: bool,
    pub brand_vision: bool,
    pub sentiment: bool,
    pub segments: bool,
    pub gtm: bool,
    /// The deck generator never stores anything
    #[cfg_attr(feature = "sqlx", sqlx(default))]
    pub deck: bool,
}

impl ModuleProgress {
    pub fn completed(&self) -> usize {
        [
            self.landscape,
            self.brand_vision,
            self.sentiment,
            self.segments,
            self.gtm,
            self.deck,
        ]
        .iter()
        .filter(|done| **done)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub project: Project,
    pub progress: ModuleProgress,
}

#[cfg(feature = "sqlx")]
pub use self::queries::*;

#[cfg(feature = "sqlx")]
mod queries {
    use super::*;
    use crate::db;
    use crate::Result;
    use sqlx::SqlitePool;
    use uuid::Uuid;

    pub async fn load_progress(db: &SqlitePool, project_id: &str) -> Result<ModuleProgress> {
        let progress = sqlx::query_as::<_, ModuleProgress>(
            r#"
            SELECT
                EXISTS (SELECT 1 FROM landscape_insights WHERE project_id = ?1) AS landscape,
                EXISTS (SELECT 1 FROM brand_vision WHERE project_id = ?1) AS brand_vision,
                EXISTS (SELECT 1 FROM consumer_sentiment WHERE project_id = ?1) AS sentiment,
                EXISTS (SELECT 1 FROM segments WHERE project_id = ?1) AS segments,
                EXISTS (SELECT 1 FROM gtm_plans WHERE project_id = ?1) AS gtm
            "#,
        )
        .bind(project_id)
        .fetch_one(db)
        .await?;

        Ok(progress)
    }

    /// Project plus progress, scoped to the calling user
    pub async fn load_context(db: &SqlitePool, user_id: &str, id: &Uuid) -> Result<ProjectContext> {
        let project = db::projects::get_owned(db, user_id, id).await?;
        let progress = load_progress(db, &project.id).await?;
        Ok(ProjectContext { project, progress })
    }

    /// Stored research a plan is generated against
    pub async fn load_insights(db: &SqlitePool, project_id: &str) -> Result<ProjectInsights> {
        Ok(ProjectInsights {
            landscape: db::landscape::list_for_project(db, project_id).await?,
            sentiment: db::sentiment::list_with_sources(db, project_id).await?,
            segments: db::segments::list_for_project(db, project_id).await?,
        })
    }
}
