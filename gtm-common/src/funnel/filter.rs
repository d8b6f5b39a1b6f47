//! Search projection over a plan
//!
//! A view borrows the plan; it never owns or reorders strategies.

use super::stage::FunnelStage;
use super::strategy::{GtmPlan, Strategy};

/// Visible strategies for one stage, in authoritative order
#[derive(Debug, Clone)]
pub struct StageView<'a> {
    pub stage: FunnelStage,
    pub items: Vec<&'a Strategy>,
}

/// Per-stage result of applying a search query
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    stages: Vec<StageView<'a>>,
}

impl<'a> FilteredView<'a> {
    /// Build the view; an empty query keeps every strategy
    pub fn new(plan: &'a GtmPlan, query: &str) -> Self {
        let needle = query.to_lowercase();
        let stages = FunnelStage::ALL
            .into_iter()
            .map(|stage| StageView {
                stage,
                items: plan
                    .strategies(stage)
                    .iter()
                    .filter(|s| needle.is_empty() || s.matches_lowercase(&needle))
                    .collect(),
            })
            .collect();

        Self { stages }
    }

    pub fn stage(&self, stage: FunnelStage) -> &[&'a Strategy] {
        self.stages
            .iter()
            .find(|v| v.stage == stage)
            .map(|v| v.items.as_slice())
            .unwrap_or(&[])
    }

    /// Identifiers visible in a stage (what the sortable list is keyed on)
    pub fn ids(&self, stage: FunnelStage) -> Vec<&'a str> {
        self.stage(stage).iter().map(|s| s.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageView<'a>> {
        self.stages.iter()
    }

    /// Total visible strategies across all stages
    pub fn len(&self) -> usize {
        self.stages.iter().map(|v| v.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> GtmPlan {
        let mut plan = GtmPlan::new("p", "Plan", "");
        plan.awareness_strategies = vec![
            Strategy::new("Protein Sampling", "Hand out bars", &["Events"], &["Samples"], "5%"),
            Strategy::new("Billboards", "City centre", &["OOH"], &["Reach"], "10%"),
        ];
        plan.conversion_strategies = vec![Strategy::new(
            "Search Ads",
            "Bid on keywords",
            &["Google Ads"],
            &["High PROTEIN intent CTR"],
            "15%",
        )];
        plan.assign_ids();
        plan
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let plan = sample_plan();
        let view = FilteredView::new(&plan, "");
        assert_eq!(view.len(), plan.len());
        assert_eq!(view.ids(FunnelStage::Awareness), vec!["awareness-0", "awareness-1"]);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let plan = sample_plan();
        let view = FilteredView::new(&plan, "protein");
        let titles: Vec<_> = view
            .stage(FunnelStage::Awareness)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Protein Sampling"]);
    }

    #[test]
    fn test_query_matches_metrics_and_channels() {
        let plan = sample_plan();
        let view = FilteredView::new(&plan, "protein");
        assert_eq!(view.ids(FunnelStage::Conversion), vec!["conversion-0"]);

        let view = FilteredView::new(&plan, "ooh");
        assert_eq!(view.ids(FunnelStage::Awareness), vec!["awareness-1"]);
        assert!(view.stage(FunnelStage::Loyalty).is_empty());
    }

    #[test]
    fn test_no_match_excluded() {
        let plan = sample_plan();
        let view = FilteredView::new(&plan, "podcast");
        assert!(view.is_empty());
    }
}
