//! Project-scoped views and the sidebar built from them
//!
//! Every view lives under `/project/:id/<view>`, where `:id` is a project
//! UUID or `new`. The root path redirects to a new project's landscape scan.

use gtm_common::context::ModuleProgress;
use gtm_common::uuid_utils::ProjectRef;
use std::fmt;

use crate::{ClientError, ClientResult};

/// The seven routed modules, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landscape,
    BrandVision,
    Sentiment,
    Segments,
    Packaging,
    Gtm,
    Deck,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Landscape,
        View::BrandVision,
        View::Sentiment,
        View::Segments,
        View::Packaging,
        View::Gtm,
        View::Deck,
    ];

    /// Path segment
    pub fn slug(&self) -> &'static str {
        match self {
            View::Landscape => "landscape",
            View::BrandVision => "brand-vision",
            View::Sentiment => "sentiment",
            View::Segments => "segments",
            View::Packaging => "packaging",
            View::Gtm => "gtm",
            View::Deck => "deck",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Landscape => "Market Landscape",
            View::BrandVision => "Brand Vision",
            View::Sentiment => "Consumer Sentiment",
            View::Segments => "Segmentation",
            View::Packaging => "Packaging Analyzer",
            View::Gtm => "GTM Plan",
            View::Deck => "Generate Deck",
        }
    }

    pub fn from_slug(slug: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.slug() == slug)
    }

    /// Completion flag shown next to the view (packaging is never tracked)
    pub fn is_complete(&self, progress: &ModuleProgress) -> bool {
        match self {
            View::Landscape => progress.landscape,
            View::BrandVision => progress.brand_vision,
            View::Sentiment => progress.sentiment,
            View::Segments => progress.segments,
            View::Packaging => false,
            View::Gtm => progress.gtm,
            View::Deck => progress.deck,
        }
    }
}

/// A view of one project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub project: ProjectRef,
    pub view: View,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            project: ProjectRef::New,
            view: View::Landscape,
        }
    }
}

impl Route {
    pub fn new(project: ProjectRef, view: View) -> Self {
        Self { project, view }
    }

    /// Parse a client path
    ///
    /// # Examples
    /// ```
    /// use gtm_client::{Route, View};
    ///
    /// let route = Route::parse("/project/new/gtm").unwrap();
    /// assert_eq!(route.view, View::Gtm);
    /// assert_eq!(Route::parse("/").unwrap(), Route::default());
    /// assert!(Route::parse("/project/new/pricing").is_err());
    /// ```
    pub fn parse(path: &str) -> ClientResult<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::default());
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["project", id, slug] => {
                let view = View::from_slug(slug)
                    .ok_or_else(|| ClientError::InvalidInput(format!("Unknown view: {}", slug)))?;
                Ok(Route::new(ProjectRef::parse(id)?, view))
            }
            _ => Err(ClientError::InvalidInput(format!("Unknown path: {}", path))),
        }
    }

    pub fn path(&self) -> String {
        format!("/project/{}/{}", self.project, self.view.slug())
    }

    /// Same project, another view
    pub fn with_view(&self, view: View) -> Self {
        Self::new(self.project, view)
    }

    /// Same view, another project (after a lazy create or a project switch)
    pub fn with_project(&self, project: ProjectRef) -> Self {
        Self::new(project, self.view)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    pub path: String,
    pub active: bool,
    pub complete: bool,
}

/// Sidebar entries for the current route
pub fn sidebar(current: &Route, progress: &ModuleProgress) -> Vec<NavItem> {
    View::ALL
        .into_iter()
        .map(|view| NavItem {
            view,
            label: view.label(),
            path: current.with_view(view).path(),
            active: view == current.view,
            complete: view.is_complete(progress),
        })
        .collect()
}
