//! Competitor listings

use crate::content::landscape::ListingTemplate;
use crate::models::LandscapeInsight;
use crate::uuid_utils;
use crate::Result;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

pub async fn insert_insights(
    db: &SqlitePool,
    project_id: &str,
    listings: Vec<ListingTemplate>,
) -> Result<Vec<LandscapeInsight>> {
    let mut tx = db.begin().await?;
    let mut saved = Vec::with_capacity(listings.len());

    for listing in listings {
        let insight = LandscapeInsight {
            id: uuid_utils::generate().to_string(),
            project_id: project_id.to_string(),
            competitor_name: listing.competitor_name,
            product_name: listing.product_name,
            price: listing.price,
            pack_size: listing.pack_size,
            claims: listing.claims,
            listing_url: listing.listing_url,
            platform: listing.platform,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO landscape_insights
                (id, project_id, competitor_name, product_name, price, pack_size,
                 claims, listing_url, platform, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&insight.id)
        .bind(&insight.project_id)
        .bind(&insight.competitor_name)
        .bind(&insight.product_name)
        .bind(insight.price)
        .bind(&insight.pack_size)
        .bind(Json(&insight.claims))
        .bind(&insight.listing_url)
        .bind(&insight.platform)
        .bind(insight.created_at)
        .execute(&mut *tx)
        .await?;

        saved.push(insight);
    }

    tx.commit().await?;
    Ok(saved)
}

pub async fn list_for_project(db: &SqlitePool, project_id: &str) -> Result<Vec<LandscapeInsight>> {
    let insights = sqlx::query_as::<_, LandscapeInsight>(
        "SELECT * FROM landscape_insights WHERE project_id = ? ORDER BY created_at, rowid",
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    Ok(insights)
}
