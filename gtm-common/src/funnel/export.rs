//! Flat tabular export of a plan
//!
//! One row per top-level strategy, stages in display order, stage label in
//! the first column. Sub-strategies are not exported. The CSV text quotes
//! every data cell and doubles embedded quotes, so [`parse_csv`] reads back
//! exactly the rows that were written.
//!
//! Channels and metrics share a cell, items joined by `"; "`. Inside an item
//! `\` and `;` are backslash-escaped and an empty item is written `\_`, so
//! `["Retail; Online"]`, `[""]` and `[]` all stay distinct.

use super::stage::FunnelStage;
use super::strategy::{GtmPlan, Strategy};
use crate::{Error, Result};

/// Fixed column order
pub const EXPORT_HEADERS: [&str; 8] = [
    "Stage",
    "Strategy",
    "Description",
    "Channels",
    "Metrics",
    "Budget",
    "Critical",
    "Notes",
];

const LIST_SEPARATOR: &str = "; ";
const EMPTY_ITEM: &str = "\\_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub stage: FunnelStage,
    pub title: String,
    pub description: String,
    pub channels: Vec<String>,
    pub metrics: Vec<String>,
    pub budget_allocation: String,
    pub critical: bool,
    pub notes: String,
}

impl ExportRow {
    pub fn from_strategy(stage: FunnelStage, strategy: &Strategy) -> Self {
        Self {
            stage,
            title: strategy.title.clone(),
            description: strategy.description.clone(),
            channels: strategy.channels.clone(),
            metrics: strategy.metrics.clone(),
            budget_allocation: strategy.budget_allocation.clone(),
            critical: strategy.is_critical,
            notes: strategy.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_cells(&self) -> [String; 8] {
        [
            self.stage.label().to_string(),
            self.title.clone(),
            self.description.clone(),
            join_list(&self.channels),
            join_list(&self.metrics),
            self.budget_allocation.clone(),
            if self.critical { "Yes" } else { "No" }.to_string(),
            self.notes.clone(),
        ]
    }

    pub fn from_cells(cells: &[String]) -> Result<Self> {
        if cells.len() != EXPORT_HEADERS.len() {
            return Err(Error::InvalidInput(format!(
                "expected {} columns, found {}",
                EXPORT_HEADERS.len(),
                cells.len()
            )));
        }

        let stage = FunnelStage::from_label(&cells[0])
            .ok_or_else(|| Error::InvalidInput(format!("unknown stage: {}", cells[0])))?;
        let critical = match cells[6].as_str() {
            "Yes" => true,
            "No" => false,
            other => {
                return Err(Error::InvalidInput(format!("invalid critical flag: {}", other)))
            }
        };

        Ok(Self {
            stage,
            title: cells[1].clone(),
            description: cells[2].clone(),
            channels: split_list(&cells[3]),
            metrics: split_list(&cells[4]),
            budget_allocation: cells[5].clone(),
            critical,
            notes: cells[7].clone(),
        })
    }
}

fn join_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            if item.is_empty() {
                EMPTY_ITEM.to_string()
            } else {
                item.replace('\\', "\\\\").replace(';', "\\;")
            }
        })
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn split_list(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = cell.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('_') => {}
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            ';' => {
                items.push(std::mem::take(&mut current));
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            _ => current.push(c),
        }
    }
    items.push(current);
    items
}

/// Flatten a plan into export rows
pub fn export_rows(plan: &GtmPlan) -> Vec<ExportRow> {
    FunnelStage::ALL
        .into_iter()
        .flat_map(|stage| {
            plan.strategies(stage)
                .iter()
                .map(move |s| ExportRow::from_strategy(stage, s))
        })
        .collect()
}

/// Render rows as CSV text (header line first, `\n` line endings)
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(EXPORT_HEADERS.join(","));
    for row in rows {
        let cells: Vec<String> = row
            .to_cells()
            .iter()
            .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Parse CSV produced by [`to_csv`] back into rows
pub fn parse_csv(text: &str) -> Result<Vec<ExportRow>> {
    let mut records = split_records(text)?.into_iter();

    let header = records
        .next()
        .ok_or_else(|| Error::InvalidInput("empty CSV".to_string()))?;
    if header != EXPORT_HEADERS {
        return Err(Error::InvalidInput(format!(
            "unexpected header: {}",
            header.join(",")
        )));
    }

    records.map(|cells| ExportRow::from_cells(&cells)).collect()
}

/// Split CSV text into records of cells (RFC 4180 quoting)
fn split_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    cell.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut cell)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut cell));
                records.push(std::mem::take(&mut record));
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err(Error::InvalidInput("unterminated quoted field".to_string()));
    }
    if !cell.is_empty() || !record.is_empty() {
        record.push(cell);
        records.push(record);
    }

    Ok(records)
}

/// Download name for a plan: lowercased, whitespace runs replaced by `-`
///
/// # Examples
/// ```
/// use gtm_common::funnel::export_file_name;
///
/// assert_eq!(export_file_name("Q2 2025  GTM Strategy"), "q2-2025-gtm-strategy-gtm-plan.csv");
/// ```
pub fn export_file_name(plan_name: &str) -> String {
    let slug = plan_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-gtm-plan.csv", slug)
}
