//! Funnel-stage strategy board
//!
//! Four ordered lists of [`Strategy`] (awareness, consideration, conversion,
//! loyalty) with drag reordering, cross-stage moves, card edits, a
//! non-mutating search projection and a flat CSV export.

pub mod board;
pub mod edit;
pub mod export;
pub mod filter;
pub mod stage;
pub mod strategy;

pub use board::{DragOutcome, FunnelBoard};
pub use edit::{EditOutcome, StrategyEdit};
pub use export::{export_file_name, parse_csv, ExportRow, EXPORT_HEADERS};
pub use filter::{FilteredView, StageView};
pub use stage::FunnelStage;
pub use strategy::{GtmPlan, Strategy};
