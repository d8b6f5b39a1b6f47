//! Strategy and plan records
//!
//! Field names on the wire follow what the UI and the `gtm_plans` table
//! already use: `budget_allocation` in snake case, `isCritical` and
//! `subStrategies` in camel case.

use super::stage::FunnelStage;
use serde::{Deserialize, Serialize};

/// A single marketing tactic belonging to one funnel stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// `"<stage>-<n>"`; empty for starter templates that have not been placed yet
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    /// Free-text share such as `"25%"`; never parsed
    #[serde(default)]
    pub budget_allocation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, rename = "isCritical")]
    pub is_critical: bool,
    #[serde(default, rename = "subStrategies", skip_serializing_if = "Vec::is_empty")]
    pub sub_strategies: Vec<Strategy>,
}

impl Strategy {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        channels: &[&str],
        metrics: &[&str],
        budget_allocation: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: description.into(),
            channels: channels.iter().map(|c| c.to_string()).collect(),
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
            budget_allocation: budget_allocation.into(),
            notes: None,
            is_critical: false,
            sub_strategies: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Blank child appended by "Add Sub-Strategy"
    pub fn placeholder_sub(id: String) -> Self {
        Self::new(
            "New Sub-Strategy",
            "Click to edit this sub-strategy",
            &[],
            &[],
            "0%",
        )
        .with_id(id)
    }

    /// Case-insensitive substring match over title, description, channels and metrics
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.channels.iter().any(|c| c.to_lowercase().contains(needle))
            || self.metrics.iter().any(|m| m.to_lowercase().contains(needle))
    }

    /// Give this strategy a new identifier and re-prefix every descendant
    ///
    /// Children created by "Add Sub-Strategy" are named `"<parent>-<suffix>"`;
    /// the suffix is kept. Children that do not follow that scheme get a fresh
    /// suffix so no identifier keeps pointing at the old stage.
    pub(crate) fn retarget(&mut self, new_id: String) {
        let old_prefix = format!("{}-", self.id);
        self.id = new_id;

        for child in &mut self.sub_strategies {
            let suffix = match child.id.strip_prefix(&old_prefix) {
                Some(rest) if !rest.is_empty() => rest.to_string(),
                _ => sub_suffix(),
            };
            child.retarget(format!("{}-{}", self.id, suffix));
        }
    }
}

/// `"sub-<token>"` with a token unique across the process lifetime
pub(crate) fn sub_suffix() -> String {
    format!("sub-{}", uuid::Uuid::new_v4().simple())
}

/// A go-to-market plan: four ordered stage lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GtmPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub awareness_strategies: Vec<Strategy>,
    #[serde(default)]
    pub consideration_strategies: Vec<Strategy>,
    #[serde(default)]
    pub conversion_strategies: Vec<Strategy>,
    #[serde(default)]
    pub loyalty_strategies: Vec<Strategy>,
}

impl GtmPlan {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            awareness_strategies: Vec::new(),
            consideration_strategies: Vec::new(),
            conversion_strategies: Vec::new(),
            loyalty_strategies: Vec::new(),
        }
    }

    pub fn strategies(&self, stage: FunnelStage) -> &[Strategy] {
        match stage {
            FunnelStage::Awareness => &self.awareness_strategies,
            FunnelStage::Consideration => &self.consideration_strategies,
            FunnelStage::Conversion => &self.conversion_strategies,
            FunnelStage::Loyalty => &self.loyalty_strategies,
        }
    }

    pub fn strategies_mut(&mut self, stage: FunnelStage) -> &mut Vec<Strategy> {
        match stage {
            FunnelStage::Awareness => &mut self.awareness_strategies,
            FunnelStage::Consideration => &mut self.consideration_strategies,
            FunnelStage::Conversion => &mut self.conversion_strategies,
            FunnelStage::Loyalty => &mut self.loyalty_strategies,
        }
    }

    /// Number of top-level strategies across all stages
    pub fn len(&self) -> usize {
        FunnelStage::ALL
            .iter()
            .map(|s| self.strategies(*s).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage and index of a top-level strategy
    pub fn locate(&self, id: &str) -> Option<(FunnelStage, usize)> {
        FunnelStage::ALL.into_iter().find_map(|stage| {
            self.strategies(stage)
                .iter()
                .position(|s| s.id == id)
                .map(|index| (stage, index))
        })
    }

    /// True if any strategy or sub-strategy carries this identifier
    pub fn contains_id(&self, id: &str) -> bool {
        fn walk(list: &[Strategy], id: &str) -> bool {
            list.iter().any(|s| s.id == id || walk(&s.sub_strategies, id))
        }
        FunnelStage::ALL
            .iter()
            .any(|stage| walk(self.strategies(*stage), id))
    }

    /// First free `"<stage>-<n>"`, starting at the stage's current length
    pub fn next_free_id(&self, stage: FunnelStage) -> String {
        let mut n = self.strategies(stage).len();
        loop {
            let candidate = stage.item_id(n);
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Number every top-level strategy `"<stage>-<index>"` in list order
    ///
    /// Applied once when a freshly generated plan arrives. Sub-strategies
    /// follow their parent.
    pub fn assign_ids(&mut self) {
        for stage in FunnelStage::ALL {
            for (index, strategy) in self.strategies_mut(stage).iter_mut().enumerate() {
                strategy.retarget(stage.item_id(index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with(stage: FunnelStage, ids: &[&str]) -> GtmPlan {
        let mut plan = GtmPlan::new("p1", "Plan", "");
        for id in ids {
            plan.strategies_mut(stage)
                .push(Strategy::new(*id, "", &[], &[], "0%").with_id(*id));
        }
        plan
    }

    #[test]
    fn test_wire_names() {
        let mut s = Strategy::new("T", "D", &["Email"], &["CTR"], "10%").with_id("loyalty-0");
        s.is_critical = true;
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["isCritical"], true);
        assert_eq!(json["budget_allocation"], "10%");
        assert!(json.get("notes").is_none());
        assert!(json.get("subStrategies").is_none());
    }

    #[test]
    fn test_deserialize_minimal_template() {
        let s: Strategy = serde_json::from_str(
            r#"{"title":"Loyalty Program","description":"Rewards","channels":["Email"],"metrics":[],"budget_allocation":"10%"}"#,
        )
        .unwrap();
        assert_eq!(s.id, "");
        assert!(!s.is_critical);
        assert!(s.sub_strategies.is_empty());
    }

    #[test]
    fn test_next_free_id_skips_taken() {
        // consideration-0 was moved out earlier, leaving a gap at the front
        let plan = plan_with(FunnelStage::Consideration, &["consideration-1"]);
        assert_eq!(plan.next_free_id(FunnelStage::Consideration), "consideration-2");

        let empty = GtmPlan::new("p", "n", "");
        assert_eq!(empty.next_free_id(FunnelStage::Loyalty), "loyalty-0");
    }

    #[test]
    fn test_assign_ids_numbers_in_order() {
        let mut plan = GtmPlan::new("p", "n", "");
        plan.awareness_strategies.push(Strategy::new("A", "", &[], &[], "1%"));
        plan.awareness_strategies.push(Strategy::new("B", "", &[], &[], "1%"));
        plan.loyalty_strategies.push(Strategy::new("C", "", &[], &[], "1%"));
        plan.assign_ids();

        assert_eq!(plan.awareness_strategies[0].id, "awareness-0");
        assert_eq!(plan.awareness_strategies[1].id, "awareness-1");
        assert_eq!(plan.loyalty_strategies[0].id, "loyalty-0");
        assert_eq!(plan.locate("awareness-1"), Some((FunnelStage::Awareness, 1)));
    }

    #[test]
    fn test_retarget_reprefixes_children() {
        let mut parent = Strategy::new("P", "", &[], &[], "5%").with_id("awareness-0");
        parent
            .sub_strategies
            .push(Strategy::placeholder_sub("awareness-0-sub-abc".to_string()));
        parent
            .sub_strategies
            .push(Strategy::placeholder_sub("imported".to_string()));

        parent.retarget("loyalty-2".to_string());

        assert_eq!(parent.sub_strategies[0].id, "loyalty-2-sub-abc");
        assert!(parent.sub_strategies[1].id.starts_with("loyalty-2-sub-"));
    }
}
