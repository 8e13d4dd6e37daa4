// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum::EnumIter;

/// Header label substituted for an empty month cell in the header row.
pub const SUMMER_BREAK_LABEL: &str = "Summer Break";

// --- SEVERITY ---

/// Classification tag on an event. Purely a category for the rendering
/// layer; no ordering between variants is implied.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Severity {
    High,
    Medium,
    Low,
    Instruction,
}

impl Severity {
    /// Lowercase stable tag for renderers that key styles by string
    /// (e.g. "high" -> red badge).
    pub fn as_tag(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Instruction => "instruction",
        }
    }

    /// Human label for the filter legend.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Severity::High => "Final / Exam / Due",
            Severity::Medium => "Draft / Feedback",
            Severity::Low => "Work Time",
            Severity::Instruction => "Instruction",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
            Severity::Instruction => write!(f, "Instruction"),
        }
    }
}

// --- SCHEDULE TYPES ---

/// One column of the schedule header. `index` is the 1-based position in
/// the header row and is the sole ordering authority for months; columns
/// are never re-sorted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MonthColumn {
    pub index: usize,
    pub name: String,
}

impl MonthColumn {
    /// True for non-teaching gap columns (blank header cells are labeled
    /// "Summer Break" by the parser); the UI renders a "Break" badge.
    pub fn is_break(&self) -> bool {
        self.name.contains("Summer")
    }
}

/// A scheduled assessment event. Immutable once created; `text` is the
/// raw (unquoted) cell content.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub month: String,
    pub text: String,
    pub severity: Severity,
}

/// One subject row. `name` doubles as the identity key for selection:
/// duplicate names in the source collide by design (a later row shares
/// selection identity with the earlier one).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    /// Sparse month-index -> event map; an absent key means nothing
    /// scheduled that month.
    pub events: HashMap<usize, Event>,
}

impl Subject {
    pub fn event_for(&self, month_index: usize) -> Option<&Event> {
        self.events.get(&month_index)
    }
}

/// The parsed schedule: subjects in source row order, months in header
/// order. Rebuilt wholesale on every raw-text change and swapped in as a
/// whole value.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleModel {
    pub subjects: Vec<Subject>,
    pub months: Vec<MonthColumn>,
}

impl ScheduleModel {
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.months.is_empty()
    }

    /// All subject names in row order. Used by hosts to seed the
    /// default "everything selected" filter state.
    pub fn subject_names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }

    /// First subject with the given name (duplicates collide).
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }
}
