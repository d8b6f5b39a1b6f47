//! Stored records, one type per table
//!
//! These are the shapes handlers return and the client decodes. List and
//! object columns are stored as JSON text.

use crate::funnel::{GtmPlan, Strategy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub geography: String,
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields a handler supplies when it has to create a project on the fly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub category: String,
    pub geography: String,
    pub brand: Option<String>,
}

impl NewProject {
    pub fn new(category: impl Into<String>, geography: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            geography: geography.into(),
            brand: None,
        }
    }

    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        self.brand = brand;
        self
    }
}

/// Competitor listing found by the landscape scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LandscapeInsight {
    pub id: String,
    pub project_id: String,
    pub competitor_name: String,
    pub product_name: String,
    pub price: f64,
    pub pack_size: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub claims: Vec<String>,
    pub listing_url: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SentimentInsight {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub category: String,
    /// `buying_driver` or `objection`
    pub insight_type: String,
    /// `positive`, `negative` or `neutral`
    pub sentiment: String,
    pub content: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SentimentSource {
    pub id: String,
    pub sentiment_id: String,
    pub source_type: String,
    pub source_url: String,
    pub source_text: String,
}

/// Sentiment insight together with the reviews it was mined from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentWithSources {
    #[serde(flatten)]
    pub insight: SentimentInsight,
    pub sentiment_sources: Vec<SentimentSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentMessages {
    pub whatsapp: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Segment {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub demographics: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub psychographics: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub behaviors: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub channels: Vec<String>,
    pub positioning: String,
    pub tagline: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub messages: SegmentMessages,
    pub created_at: DateTime<Utc>,
}

/// At most one per project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BrandVision {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub mission: String,
    pub tone: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub communication_dos: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub communication_donts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct GtmPlanRecord {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub awareness_strategies: Vec<Strategy>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub consideration_strategies: Vec<Strategy>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub conversion_strategies: Vec<Strategy>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub loyalty_strategies: Vec<Strategy>,
    pub created_at: DateTime<Utc>,
}

impl GtmPlanRecord {
    /// Board-facing view of the stored plan
    pub fn to_plan(&self) -> GtmPlan {
        GtmPlan {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            awareness_strategies: self.awareness_strategies.clone(),
            consideration_strategies: self.consideration_strategies.clone(),
            conversion_strategies: self.conversion_strategies.clone(),
            loyalty_strategies: self.loyalty_strategies.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSegment {
    pub name: String,
    pub description: String,
    pub demographics: Vec<String>,
    pub psychographics: Vec<String>,
    pub behaviors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneVoice {
    pub brand_tone: String,
    pub communication_dos: Vec<String>,
    pub communication_donts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CreativeBrief {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub version: i64,
    pub objective: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub target_segment: TargetSegment,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub key_messages: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub mandatory_claims: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub tone_voice: ToneVoice,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub visual_ideas: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub severity: String,
}

/// At most one per project; front and back images fill in separately
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PackagingReview {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub front_image_url: Option<String>,
    pub back_image_url: Option<String>,
    pub scanned_text: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub claims: Vec<String>,
    pub readability_score: i64,
    pub clutter_score: i64,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub compliance_issues: Vec<ComplianceIssue>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchTheme {
    pub name: String,
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct QualResearchInsight {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub research_type: String,
    pub file_name: String,
    pub file_url: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub themes: Vec<ResearchTheme>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub key_quotes: Vec<String>,
    pub sentiment: String,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub barriers: Vec<String>,
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub drivers: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ChannelFeasibility {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub city_tier: String,
    pub channel: String,
    pub feasibility_score: String,
    pub rationale: String,
    pub created_at: DateTime<Utc>,
}

/// Insights a plan was generated against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInsights {
    pub landscape: Vec<LandscapeInsight>,
    pub sentiment: Vec<SentimentWithSources>,
    pub segments: Vec<Segment>,
}

/// Which side of the pack a packaging image shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchType {
    /// Focus group discussion
    Fgd,
    /// Depth interview
    Di,
    ExpertInterview,
}

impl ResearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchType::Fgd => "fgd",
            ResearchType::Di => "di",
            ResearchType::ExpertInterview => "expert_interview",
        }
    }
}
