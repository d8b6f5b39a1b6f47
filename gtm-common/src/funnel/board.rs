//! Funnel board: the in-memory model behind the GTM plan canvas
//!
//! Owns one [`GtmPlan`] and applies drag gestures and card edits to it.
//! Every operation is total: an unknown identifier leaves the plan untouched
//! and reports that nothing happened.

use super::edit::{EditOutcome, StrategyEdit};
use super::export::{self, ExportRow};
use super::filter::FilteredView;
use super::stage::FunnelStage;
use super::strategy::{sub_suffix, GtmPlan, Strategy};
use crate::content;
use tracing::debug;

/// Result of a completed drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Same-stage array move
    Reordered {
        stage: FunnelStage,
        from: usize,
        to: usize,
    },
    /// Cross-stage move; the strategy now lives at the destination's tail
    Moved {
        from: FunnelStage,
        to: FunnelStage,
        new_id: String,
    },
    Unchanged,
}

/// Where a strategy was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropTarget<'a> {
    /// The stage column itself (the only target an empty column offers)
    Column(FunnelStage),
    /// Another strategy card
    Card(FunnelStage, &'a str),
}

impl<'a> DropTarget<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        if let Ok(stage) = raw.parse::<FunnelStage>() {
            return Some(DropTarget::Column(stage));
        }
        FunnelStage::of_id(raw).map(|stage| DropTarget::Card(stage, raw))
    }

    fn stage(&self) -> FunnelStage {
        match self {
            DropTarget::Column(stage) | DropTarget::Card(stage, _) => *stage,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunnelBoard {
    plan: GtmPlan,
    lifted: Option<String>,
}

impl FunnelBoard {
    pub fn new(plan: GtmPlan) -> Self {
        Self { plan, lifted: None }
    }

    /// Board for a freshly generated plan: numbers every strategy first
    pub fn from_generated(mut plan: GtmPlan) -> Self {
        plan.assign_ids();
        Self::new(plan)
    }

    pub fn plan(&self) -> &GtmPlan {
        &self.plan
    }

    pub fn into_plan(self) -> GtmPlan {
        self.plan
    }

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------

    /// Record the lifted card; returns false (and lifts nothing) for an unknown id
    pub fn start_drag(&mut self, id: &str) -> bool {
        if self.plan.locate(id).is_some() {
            self.lifted = Some(id.to_string());
            true
        } else {
            debug!("start_drag ignored, unknown strategy {}", id);
            self.lifted = None;
            false
        }
    }

    /// Currently lifted strategy (drag overlay)
    pub fn lifted(&self) -> Option<&Strategy> {
        let id = self.lifted.as_deref()?;
        let (stage, index) = self.plan.locate(id)?;
        self.plan.strategies(stage).get(index)
    }

    /// Drop `id` onto `target` (a card id or a bare stage name)
    pub fn end_drag(&mut self, id: &str, target: Option<&str>) -> DragOutcome {
        self.lifted = None;

        let outcome = self.resolve_drop(id, target);
        if outcome == DragOutcome::Unchanged {
            debug!("drop of {} onto {:?} left the board unchanged", id, target);
        }
        outcome
    }

    fn resolve_drop(&mut self, id: &str, target: Option<&str>) -> DragOutcome {
        let Some(target) = target else {
            return DragOutcome::Unchanged;
        };
        if id == target {
            return DragOutcome::Unchanged;
        }
        let (Some(source), Some(target)) = (FunnelStage::of_id(id), DropTarget::parse(target))
        else {
            return DragOutcome::Unchanged;
        };
        let Some(from) = self.plan.strategies(source).iter().position(|s| s.id == id) else {
            return DragOutcome::Unchanged;
        };

        let dest = target.stage();
        if source == dest {
            let list = self.plan.strategies_mut(source);
            let to = match target {
                DropTarget::Column(_) => list.len() - 1,
                DropTarget::Card(_, over) => match list.iter().position(|s| s.id == over) {
                    Some(index) => index,
                    None => return DragOutcome::Unchanged,
                },
            };
            if from == to {
                return DragOutcome::Unchanged;
            }

            let item = list.remove(from);
            list.insert(to, item);
            return DragOutcome::Reordered {
                stage: source,
                from,
                to,
            };
        }

        if let DropTarget::Card(_, over) = target {
            if !self.plan.strategies(dest).iter().any(|s| s.id == over) {
                return DragOutcome::Unchanged;
            }
        }

        let mut item = self.plan.strategies_mut(source).remove(from);
        let new_id = self.plan.next_free_id(dest);
        item.retarget(new_id.clone());
        self.plan.strategies_mut(dest).push(item);

        DragOutcome::Moved {
            from: source,
            to: dest,
            new_id,
        }
    }

    // ------------------------------------------------------------------
    // Card edits
    // ------------------------------------------------------------------

    fn find_mut(&mut self, stage: FunnelStage, id: &str) -> Option<&mut Strategy> {
        let found = self
            .plan
            .strategies_mut(stage)
            .iter_mut()
            .find(|s| s.id == id);
        if found.is_none() {
            debug!("no strategy {} in {}", id, stage);
        }
        found
    }

    /// Flip the critical flag; false if not found
    pub fn toggle_critical(&mut self, stage: FunnelStage, id: &str) -> bool {
        match self.find_mut(stage, id) {
            Some(strategy) => {
                strategy.is_critical = !strategy.is_critical;
                true
            }
            None => false,
        }
    }

    /// Replace the note; false if not found
    pub fn set_note(&mut self, stage: FunnelStage, id: &str, text: impl Into<String>) -> bool {
        match self.find_mut(stage, id) {
            Some(strategy) => {
                strategy.notes = Some(text.into());
                true
            }
            None => false,
        }
    }

    /// Append a placeholder child to `parent_id`; returns the child's id
    pub fn add_sub_strategy(&mut self, stage: FunnelStage, parent_id: &str) -> Option<String> {
        let parent = self.find_mut(stage, parent_id)?;
        let id = format!("{}-{}", parent.id, sub_suffix());
        parent.sub_strategies.push(Strategy::placeholder_sub(id.clone()));
        Some(id)
    }

    /// Append the canned AI suggestion to a stage; returns its id
    pub fn suggest_strategy(&mut self, stage: FunnelStage) -> String {
        let id = self.plan.next_free_id(stage);
        let suggestion = content::gtm::suggested_strategy().with_id(id.clone());
        self.plan.strategies_mut(stage).push(suggestion);
        id
    }

    /// Route a tagged edit to its operation
    pub fn apply(&mut self, edit: StrategyEdit) -> EditOutcome {
        match edit {
            StrategyEdit::ToggleCritical { stage, id } => {
                EditOutcome::updated_if(self.toggle_critical(stage, &id))
            }
            StrategyEdit::SetNote { stage, id, text } => {
                EditOutcome::updated_if(self.set_note(stage, &id, text))
            }
            StrategyEdit::AddSubStrategy { stage, parent_id } => {
                match self.add_sub_strategy(stage, &parent_id) {
                    Some(id) => EditOutcome::Created { id },
                    None => EditOutcome::Unchanged,
                }
            }
            StrategyEdit::Suggest { stage } => EditOutcome::Created {
                id: self.suggest_strategy(stage),
            },
            StrategyEdit::Drag { id, target } => {
                self.start_drag(&id);
                match self.end_drag(&id, target.as_deref()) {
                    DragOutcome::Unchanged => EditOutcome::Unchanged,
                    outcome => EditOutcome::Dragged(outcome),
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn filter(&self, query: &str) -> FilteredView<'_> {
        FilteredView::new(&self.plan, query)
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        export::export_rows(&self.plan)
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(&self.export_rows())
    }

    pub fn export_file_name(&self) -> String {
        export::export_file_name(&self.plan.name)
    }
}
