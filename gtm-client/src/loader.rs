//! Per-route data loading
//!
//! A view renders from a [`RouteData`] resolved before it mounts. For the
//! `new` project nothing is fetched beyond the project list: every
//! project-scoped read would come back empty.

use gtm_common::context::ProjectContext;
use gtm_common::models::{
    BrandVision, CreativeBrief, GtmPlanRecord, LandscapeInsight, Project, Segment,
    SentimentWithSources,
};
use gtm_common::uuid_utils::ProjectRef;
use tracing::debug;

use crate::routes::{Route, View};
use crate::{BffClient, ClientResult};

/// Stored data a view starts from
#[derive(Debug, Clone, PartialEq)]
pub enum ViewData {
    Landscape(Vec<LandscapeInsight>),
    BrandVision(Option<BrandVision>),
    Sentiment(Vec<SentimentWithSources>),
    Segments(Vec<Segment>),
    /// Upload form only
    Packaging,
    Gtm {
        plan: Option<GtmPlanRecord>,
        brief: Option<CreativeBrief>,
    },
    /// Stub view
    Deck,
}

impl ViewData {
    /// What a view shows for a project with nothing stored yet
    pub fn empty(view: View) -> Self {
        match view {
            View::Landscape => ViewData::Landscape(Vec::new()),
            View::BrandVision => ViewData::BrandVision(None),
            View::Sentiment => ViewData::Sentiment(Vec::new()),
            View::Segments => ViewData::Segments(Vec::new()),
            View::Packaging => ViewData::Packaging,
            View::Gtm => ViewData::Gtm {
                plan: None,
                brief: None,
            },
            View::Deck => ViewData::Deck,
        }
    }
}

/// Everything a routed view needs on first render
#[derive(Debug, Clone, PartialEq)]
pub struct RouteData {
    pub route: Route,
    /// `None` for the `new` project
    pub context: Option<ProjectContext>,
    /// Project switcher contents
    pub projects: Vec<Project>,
    pub view: ViewData,
}

/// Fetch the data for `route`
pub async fn load_route(client: &BffClient, route: &Route) -> ClientResult<RouteData> {
    let projects = client.projects().await?;

    let id = match route.project {
        ProjectRef::New => {
            return Ok(RouteData {
                route: *route,
                context: None,
                projects,
                view: ViewData::empty(route.view),
            })
        }
        ProjectRef::Id(id) => id.to_string(),
    };

    let context = client.project_context(&id).await?;
    let project = &route.project;
    let view = match route.view {
        View::Landscape => ViewData::Landscape(client.landscape_insights(project).await?),
        View::BrandVision => ViewData::BrandVision(client.brand_vision(project).await?),
        View::Sentiment => ViewData::Sentiment(client.sentiment_insights(project).await?),
        View::Segments => ViewData::Segments(client.segments(project).await?),
        View::Packaging => ViewData::Packaging,
        View::Gtm => ViewData::Gtm {
            plan: client.latest_plan(project).await?,
            brief: client.latest_brief(project).await?,
        },
        View::Deck => ViewData::Deck,
    };

    debug!(
        "Loaded {} ({} of 6 modules complete)",
        route,
        context.progress.completed()
    );
    Ok(RouteData {
        route: *route,
        context: Some(context),
        projects,
        view,
    })
}
