//! HTTP client for the backend-for-frontend service
//!
//! Every module call carries the public API key and the signed-in user's
//! bearer token. Failures come back as [`ClientError::Api`] with the
//! service's `{"error": ...}` message.

use gtm_common::brief::BriefEdit;
use gtm_common::config::ClientConfig;
use gtm_common::context::ProjectContext;
use gtm_common::funnel::GtmPlan;
use gtm_common::models::{
    BrandVision, ChannelFeasibility, CreativeBrief, GtmPlanRecord, LandscapeInsight,
    PackagingReview, Project, ProjectInsights, QualResearchInsight, Segment,
    SentimentWithSources,
};
use gtm_common::uuid_utils::ProjectRef;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::requests::{
    BrandVisionForm, BriefRequest, LandscapeScan, PackagingUpload, PlanRequest, ProjectOnly,
    ResearchUpload, SegmentationForm, SentimentMining,
};
use crate::{ClientError, ClientResult};

/// Route prefix of every module action
pub const FUNCTIONS_PREFIX: &str = "/functions/v1";

const API_KEY_HEADER: &str = "apikey";
const USER_AGENT: &str = concat!("gtm-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanResult {
    pub project: Project,
    pub insights: Vec<LandscapeInsight>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub segments: Vec<Segment>,
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedPlan {
    pub plan: GtmPlanRecord,
    pub insights: ProjectInsights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub module: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Deserialize)]
struct Insights<T> {
    insights: T,
}

#[derive(Deserialize)]
struct Segments {
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct Vision {
    vision: Option<BrandVision>,
}

#[derive(Deserialize)]
struct Review {
    review: PackagingReview,
}

#[derive(Deserialize)]
struct Plan {
    plan: Option<GtmPlanRecord>,
}

#[derive(Deserialize)]
struct Brief<T> {
    brief: T,
}

#[derive(Deserialize)]
struct Insight {
    insight: QualResearchInsight,
}

#[derive(Deserialize)]
struct Feasibility {
    data: Vec<ChannelFeasibility>,
}

#[derive(Deserialize)]
struct Projects {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct OneProject {
    project: Project,
}

/// Typed client for the service
#[derive(Debug, Clone)]
pub struct BffClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl BffClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            config,
            token: None,
        })
    }

    /// Client configured from `GTM_BASE_URL` and `GTM_PUBLIC_API_KEY`
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}{}", self.config.base_url, FUNCTIONS_PREFIX, path);
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.public_api_key)
    }

    fn get_for(&self, path: &str, project: &ProjectRef) -> RequestBuilder {
        self.request(Method::GET, path)
            .query(&[("projectId", project.to_string())])
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.request(Method::POST, path).json(body)
    }

    /// Send with credentials; returns the body text of a success response
    async fn send_text(&self, request: RequestBuilder) -> ClientResult<String> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| ClientError::Config("Not signed in".to_string()))?;

        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            warn!("Request failed with {}: {}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let body = self.send_text(request).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// GET /health (no credentials needed)
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = format!("{}/health", self.config.base_url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ========================================================================
    // Market landscape
    // ========================================================================

    pub async fn scan_landscape(&self, scan: &LandscapeScan) -> ClientResult<ScanResult> {
        debug!("Starting landscape scan for {}", scan.category);
        self.send(self.post("/market-landscape", scan)).await
    }

    pub async fn landscape_insights(
        &self,
        project: &ProjectRef,
    ) -> ClientResult<Vec<LandscapeInsight>> {
        let body: Insights<_> = self
            .send(self.get_for("/market-landscape", project))
            .await?;
        Ok(body.insights)
    }

    // ========================================================================
    // Consumer sentiment
    // ========================================================================

    pub async fn mine_sentiment(
        &self,
        form: &SentimentMining,
    ) -> ClientResult<Vec<SentimentWithSources>> {
        let body: Insights<_> = self.send(self.post("/consumer-sentiment", form)).await?;
        Ok(body.insights)
    }

    pub async fn sentiment_insights(
        &self,
        project: &ProjectRef,
    ) -> ClientResult<Vec<SentimentWithSources>> {
        let body: Insights<_> = self
            .send(self.get_for("/consumer-sentiment", project))
            .await?;
        Ok(body.insights)
    }

    // ========================================================================
    // Segmentation
    // ========================================================================

    pub async fn generate_segments(
        &self,
        form: &SegmentationForm,
    ) -> ClientResult<SegmentationResult> {
        self.send(self.post("/segmentation", form)).await
    }

    pub async fn segments(&self, project: &ProjectRef) -> ClientResult<Vec<Segment>> {
        let body: Segments = self.send(self.get_for("/segmentation", project)).await?;
        Ok(body.segments)
    }

    // ========================================================================
    // Brand vision
    // ========================================================================

    pub async fn brand_vision(&self, project: &ProjectRef) -> ClientResult<Option<BrandVision>> {
        let body: Vision = self.send(self.get_for("/brand-vision", project)).await?;
        Ok(body.vision)
    }

    pub async fn save_brand_vision(&self, form: &BrandVisionForm) -> ClientResult<BrandVision> {
        let body: Vision = self.send(self.post("/brand-vision", form)).await?;
        body.vision
            .ok_or_else(|| ClientError::Decode("response carried no vision".to_string()))
    }

    // ========================================================================
    // Packaging
    // ========================================================================

    pub async fn analyze_packaging(&self, upload: &PackagingUpload) -> ClientResult<PackagingReview> {
        let body: Review = self.send(self.post("/packaging-analysis", upload)).await?;
        Ok(body.review)
    }

    // ========================================================================
    // GTM plan
    // ========================================================================

    pub async fn generate_plan(&self, request: &PlanRequest) -> ClientResult<GeneratedPlan> {
        self.send(self.post("/gtm-plan", request)).await
    }

    pub async fn latest_plan(&self, project: &ProjectRef) -> ClientResult<Option<GtmPlanRecord>> {
        let body: Plan = self.send(self.get_for("/gtm-plan", project)).await?;
        Ok(body.plan)
    }

    /// CSV text of the plan as currently arranged on the board
    pub async fn export_plan(&self, plan: &GtmPlan) -> ClientResult<String> {
        self.send_text(self.post("/gtm-plan/export", plan)).await
    }

    // ========================================================================
    // Creative brief
    // ========================================================================

    pub async fn generate_brief(&self, request: &BriefRequest) -> ClientResult<CreativeBrief> {
        let body: Brief<CreativeBrief> = self.send(self.post("/creative-brief", request)).await?;
        Ok(body.brief)
    }

    pub async fn latest_brief(&self, project: &ProjectRef) -> ClientResult<Option<CreativeBrief>> {
        let body: Brief<Option<CreativeBrief>> =
            self.send(self.get_for("/creative-brief", project)).await?;
        Ok(body.brief)
    }

    pub async fn edit_brief(&self, brief_id: &str, edit: &BriefEdit) -> ClientResult<CreativeBrief> {
        let path = format!("/creative-brief/{}", brief_id);
        let body: Brief<Option<CreativeBrief>> = self
            .send(self.request(Method::PATCH, &path).json(edit))
            .await?;
        body.brief
            .ok_or_else(|| ClientError::Decode("response carried no brief".to_string()))
    }

    /// Plain-text rendering of a brief
    pub async fn download_brief(&self, brief_id: &str) -> ClientResult<String> {
        let path = format!("/creative-brief/{}/download", brief_id);
        self.send_text(self.request(Method::GET, &path)).await
    }

    // ========================================================================
    // Qualitative research and channel feasibility
    // ========================================================================

    pub async fn analyze_research(&self, upload: &ResearchUpload) -> ClientResult<QualResearchInsight> {
        let body: Insight = self.send(self.post("/qualitative-research", upload)).await?;
        Ok(body.insight)
    }

    pub async fn channel_feasibility(&self, project_id: &str) -> ClientResult<Vec<ChannelFeasibility>> {
        let body: Feasibility = self
            .send(self.post("/channel-feasibility", &ProjectOnly { project_id }))
            .await?;
        Ok(body.data)
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub async fn projects(&self) -> ClientResult<Vec<Project>> {
        let body: Projects = self.send(self.request(Method::GET, "/projects")).await?;
        Ok(body.projects)
    }

    pub async fn project_context(&self, project_id: &str) -> ClientResult<ProjectContext> {
        let path = format!("/projects/{}", project_id);
        self.send(self.request(Method::GET, &path)).await
    }

    pub async fn duplicate_project(&self, project_id: &str) -> ClientResult<Project> {
        let path = format!("/projects/{}/duplicate", project_id);
        let body: OneProject = self.send(self.request(Method::POST, &path)).await?;
        Ok(body.project)
    }
}
