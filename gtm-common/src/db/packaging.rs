//! Packaging reviews (one per project)

use crate::content::packaging::PackagingFindings;
use crate::models::{ImageSide, PackagingReview};
use crate::uuid_utils;
use crate::{Error, Result};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

pub async fn get_for_project(db: &SqlitePool, project_id: &str) -> Result<Option<PackagingReview>> {
    let review =
        sqlx::query_as::<_, PackagingReview>("SELECT * FROM packaging_reviews WHERE project_id = ?")
            .bind(project_id)
            .fetch_optional(db)
            .await?;

    Ok(review)
}

/// Record an analysed image against the project's review
///
/// Only the side named by `side` receives `image_url`; an image already
/// stored for the other side is kept.
pub async fn upsert_review(
    db: &SqlitePool,
    project_id: &str,
    user_id: &str,
    side: ImageSide,
    image_url: &str,
    scanned_text: &str,
    findings: &PackagingFindings,
) -> Result<PackagingReview> {
    let (front, back) = match side {
        ImageSide::Front => (Some(image_url), None),
        ImageSide::Back => (None, Some(image_url)),
    };

    sqlx::query(
        r#"
        INSERT INTO packaging_reviews
            (id, project_id, user_id, front_image_url, back_image_url, scanned_text, claims,
             readability_score, clutter_score, compliance_issues, recommendations, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(project_id) DO UPDATE SET
            user_id = excluded.user_id,
            front_image_url = COALESCE(excluded.front_image_url, packaging_reviews.front_image_url),
            back_image_url = COALESCE(excluded.back_image_url, packaging_reviews.back_image_url),
            scanned_text = excluded.scanned_text,
            claims = excluded.claims,
            readability_score = excluded.readability_score,
            clutter_score = excluded.clutter_score,
            compliance_issues = excluded.compliance_issues,
            recommendations = excluded.recommendations
        "#,
    )
    .bind(uuid_utils::generate().to_string())
    .bind(project_id)
    .bind(user_id)
    .bind(front)
    .bind(back)
    .bind(scanned_text)
    .bind(Json(&findings.claims))
    .bind(findings.readability_score)
    .bind(findings.clutter_score)
    .bind(Json(&findings.compliance_issues))
    .bind(Json(&findings.recommendations))
    .bind(Utc::now())
    .execute(db)
    .await?;

    get_for_project(db, project_id)
        .await?
        .ok_or_else(|| Error::Internal("packaging review missing after upsert".to_string()))
}
