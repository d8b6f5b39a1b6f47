//! Project rows
//!
//! Every read is scoped to the calling user; a project that belongs to
//! someone else is indistinguishable from one that does not exist.

use crate::models::{NewProject, Project};
use crate::uuid_utils::{self, ProjectRef};
use crate::{Error, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

pub async fn create_project(db: &SqlitePool, user_id: &str, new: &NewProject) -> Result<Project> {
    let project = Project {
        id: uuid_utils::generate().to_string(),
        user_id: user_id.to_string(),
        category: new.category.clone(),
        geography: new.geography.clone(),
        brand: new.brand.clone(),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO projects (id, user_id, category, geography, brand, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&project.id)
    .bind(&project.user_id)
    .bind(&project.category)
    .bind(&project.geography)
    .bind(&project.brand)
    .bind(project.created_at)
    .execute(db)
    .await?;

    info!("Created project {} ({})", project.id, project.category);
    Ok(project)
}

/// Fetch a project the user owns
pub async fn get_owned(db: &SqlitePool, user_id: &str, id: &Uuid) -> Result<Project> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ? AND user_id = ?")
        .bind(id.to_string())
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Project {} not found", id)))
}

/// The user's projects, newest first
pub async fn list_projects(db: &SqlitePool, user_id: &str) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT * FROM projects WHERE user_id = ? ORDER BY created_at DESC, rowid DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(projects)
}

/// Copy category, geography and brand into a fresh project
pub async fn duplicate_project(db: &SqlitePool, user_id: &str, id: &Uuid) -> Result<Project> {
    let source = get_owned(db, user_id, id).await?;
    let copy = NewProject::new(source.category, source.geography).with_brand(source.brand);
    create_project(db, user_id, &copy).await
}

/// Resolve a request's project reference
///
/// `new` creates a project from `fallback`; an id must name a project the
/// user owns.
pub async fn resolve_project(
    db: &SqlitePool,
    user_id: &str,
    project: ProjectRef,
    fallback: NewProject,
) -> Result<Project> {
    match project {
        ProjectRef::New => create_project(db, user_id, &fallback).await,
        ProjectRef::Id(id) => get_owned(db, user_id, &id).await,
    }
}

/// Like [`resolve_project`] for handlers that cannot start a project
pub async fn require_existing(db: &SqlitePool, user_id: &str, project: ProjectRef) -> Result<Project> {
    match project {
        ProjectRef::New => Err(Error::InvalidInput("Project ID is required".to_string())),
        ProjectRef::Id(id) => get_owned(db, user_id, &id).await,
    }
}
