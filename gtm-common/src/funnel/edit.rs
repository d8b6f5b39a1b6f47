//! Tagged board edits
//!
//! One variant per gesture the canvas can make, so callers never address
//! strategy fields by string key.

use super::board::DragOutcome;
use super::stage::FunnelStage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StrategyEdit {
    ToggleCritical {
        stage: FunnelStage,
        id: String,
    },
    SetNote {
        stage: FunnelStage,
        id: String,
        text: String,
    },
    AddSubStrategy {
        stage: FunnelStage,
        parent_id: String,
    },
    Suggest {
        stage: FunnelStage,
    },
    Drag {
        id: String,
        #[serde(default)]
        target: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Created { id: String },
    Dragged(DragOutcome),
    Unchanged,
}

impl EditOutcome {
    pub(crate) fn updated_if(changed: bool) -> Self {
        if changed {
            EditOutcome::Updated
        } else {
            EditOutcome::Unchanged
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, EditOutcome::Unchanged)
    }
}
