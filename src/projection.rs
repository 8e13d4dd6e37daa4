// File: ./src/projection.rs
// Pure derivation of the display-ready view from a parsed model plus
// filter state. Never mutates the model; equal inputs give value-equal
// output.
use crate::model::display::EventDisplay;
use crate::model::{MonthColumn, ScheduleModel, Severity};
use serde::Serialize;
use std::collections::HashSet;
use strum::IntoEnumIterator;

pub struct FilterOptions<'a> {
    pub selected_subjects: &'a HashSet<String>,
    pub show_instruction: bool,
}

/// One visible cell: severity tag plus the normalized display text.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ProjectedCell {
    pub severity: Severity,
    pub text: String,
}

/// One subject row; `cells` runs parallel to the view's `months`.
/// `None` means blank (no event, or an Instruction cell that is hidden).
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SubjectRow {
    pub name: String,
    pub cells: Vec<Option<ProjectedCell>>,
}

/// Timeline grouping: the visible entries of one month, in subject order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthGroup {
    pub month: MonthColumn,
    pub entries: Vec<(String, ProjectedCell)>,
}

/// The filtered, display-ready projection. Months keep the model's header
/// order and are never removed by filtering; only cells go blank.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ProjectedView {
    pub months: Vec<MonthColumn>,
    pub rows: Vec<SubjectRow>,
}

impl ProjectedView {
    /// Month-grouped shape for the timeline view. Months with no visible
    /// entry are skipped here (the grid keeps them as columns).
    pub fn month_groups(&self) -> Vec<MonthGroup> {
        let mut groups = Vec::new();
        for (i, month) in self.months.iter().enumerate() {
            let entries: Vec<(String, ProjectedCell)> = self
                .rows
                .iter()
                .filter_map(|row| {
                    row.cells[i]
                        .as_ref()
                        .map(|cell| (row.name.clone(), cell.clone()))
                })
                .collect();
            if !entries.is_empty() {
                groups.push(MonthGroup {
                    month: month.clone(),
                    entries,
                });
            }
        }
        groups
    }

    /// Visible cell count per severity, every variant listed. Feeds the
    /// filter legend / summary line.
    pub fn severity_breakdown(&self) -> Vec<(Severity, usize)> {
        Severity::iter()
            .map(|sev| {
                let count = self
                    .rows
                    .iter()
                    .flat_map(|row| row.cells.iter().flatten())
                    .filter(|cell| cell.severity == sev)
                    .count();
                (sev, count)
            })
            .collect()
    }

    /// JSON export for non-Rust rendering layers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Computes the month-ordered, subject-ordered view consumed by rendering.
///
/// Rows are the model's subjects filtered to the selected set, model order
/// preserved. A cell is present iff the subject has an event that month and
/// either `show_instruction` is set or the event is not an Instruction one.
pub fn project(model: &ScheduleModel, options: FilterOptions) -> ProjectedView {
    let rows = model
        .subjects
        .iter()
        .filter(|s| options.selected_subjects.contains(&s.name))
        .map(|subject| {
            let cells = model
                .months
                .iter()
                .map(|month| {
                    subject
                        .event_for(month.index)
                        .filter(|e| {
                            options.show_instruction || e.severity != Severity::Instruction
                        })
                        .map(|e| ProjectedCell {
                            severity: e.severity,
                            text: e.display_text(),
                        })
                })
                .collect();
            SubjectRow {
                name: subject.name.clone(),
                cells,
            }
        })
        .collect();

    ProjectedView {
        months: model.months.clone(),
        rows,
    }
}
