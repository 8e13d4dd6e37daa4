// File: ./src/state.rs
// Host-owned application state for the calendar engine. The engine keeps
// no process-wide state: the composing layer owns an AppState value and
// calls its mutation entry points; everything displayed derives from it.
use crate::model::ScheduleModel;
use crate::model::parser::parse_schedule;
use crate::projection::{FilterOptions, ProjectedView, project};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strum::EnumIter;

/// Built-in dataset restored by [`AppState::reset_to_default`]. Two school
/// years of IB assessment rows, with one blank header column for the
/// summer gap and a closing "IB EXAMS" column.
pub const DEFAULT_CSV_DATA: &str = r#"Subject,August Y1,September Y1,October Y1,November Y1,December Y1,January Y1,February Y1,March Y1,April Y1,May Y1,June Y1,,August Y2,September Y2,October Y2,November Y2,December Y2,January Y2,February Y2,March Y2,April Y2,IB EXAMS
English Language and Literature,Instruction,Instruction,Examination Paper,Instruction,Examination Paper,,,,,,IA or External Assessment,,Examination Paper,HL Essay Work Time,HL Essay (Draft) Due for Feedback,"HL Essay (Final) Due, Examination Paper",IA or External Assessment,,,,
Portuguese Language and Literature,Instruction,Instruction,Instruction,Instruction,Examination Paper,,Instruction,Instruction,Instruction,IA (Draft) Due for Feedback,IA or External Assessment,,HL Essay (Draft) Due for Feedback,HL Essay (Final) Due,Examination Paper,IA Work time,IA or External Assessment,Instruction,Instruction,Examination Paper,Examination Paper
French B,Instruction,Instruction,Instruction,Instruction,,IA Work time,IA (Draft) Due for Feedback,IA (Final) Delivered,,,,,,,,,,,,,
Spanish B,Instruction,Instruction,IA (Draft) Due for Feedback,IA (Final) Delivered,,Instruction,Instruction,Instruction,,,,,,,,,,,,,
Brazilian Social Studies,"Instruction, IA Work time",Instruction,Instruction,Instruction,Examination Paper,"Instruction, IA Work time",Instruction,Instruction,Instruction,Instruction,Examination Paper,,"IA Work time, Instruction",IA Work time,"IA Work time, Instruction",IA (Draft) Due for Feedback,Examination Paper,Instruction,IA (Final) Delivered,Instruction,Instruction
Math Apps SL,Instruction,Instruction,Instruction,Instruction,Examination Paper,Instruction,Instruction,Instruction,Instruction,Instruction,Examination Paper,,Instruction,Instruction,IA Work time,"IA Work time, IA (Draft) Due for Feedback",Examination Paper,IA (Final) Delivered,Instruction,Instruction,Examination Paper
Computer Science,"Instruction, Examination Paper",Instruction,Examination Paper,Instruction,Examination Paper,Instruction,Instruction,Examination Paper,Instruction,Instruction,Examination Paper,,Instruction,IA Work time,"Instruction, IA Work time","IA Work time, IA (Draft) Due for Feedback",Examination Paper,"Instruction, IA Work time",IA (Final) Delivered,Examination Paper,Examination Paper
Visual Arts,Instruction,Instruction,Instruction,External Assessment (Draft) due for Feedback,Examination Paper,IA Work time,IA (Draft) Due for Feedback,External Assessment (Final) delivered,IA (Final) Delivered,Instruction,,,Instruction,Instruction,Instruction,External Assessment (Draft) due for Feedback,Examination Paper,IA Work time,IA Work time,External Assessment (Final) delivered,IA (Final) Delivered
Theory of Knowledge,Instruction,Instruction,Instruction,Instruction,IA or External Assessment,IA Work time,IA Work time,IA (Draft) Due for Feedback,IA (Final) Delivered,Instruction,IA or External Assessment,,Instruction,External Assessment Work Time,External Assessment (Draft) due for Feedback,External Assessment (Final) delivered,IA or External Assessment,,,,,"#;

static DEFAULT_MODEL: Lazy<ScheduleModel> = Lazy::new(|| parse_schedule(DEFAULT_CSV_DATA));

/// Which of the two renderings the host currently shows. Carried here so
/// hosts have a single state value to persist; it does not affect the
/// projection itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, EnumIter)]
pub enum ViewMode {
    #[default]
    Timeline,
    Grid,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Timeline => write!(f, "Timeline"),
            ViewMode::Grid => write!(f, "Grid"),
        }
    }
}

pub struct AppState {
    // Data
    raw_text: String,
    model: ScheduleModel,

    // Filter State
    selected_subjects: HashSet<String>,
    show_instruction: bool,
    view_mode: ViewMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State initialized from the built-in dataset, all subjects selected.
    pub fn new() -> Self {
        let mut state = Self::empty();
        state.reset_to_default();
        state
    }

    /// Blank state: no model, nothing selected, instruction days hidden.
    pub fn empty() -> Self {
        Self {
            raw_text: String::new(),
            model: ScheduleModel::default(),
            selected_subjects: HashSet::new(),
            show_instruction: false,
            view_mode: ViewMode::default(),
        }
    }

    // --- Data ---

    /// Replaces the raw text and rebuilds the model wholesale. The model
    /// swap is a whole-value replace; callers never observe a partially
    /// parsed model. Selection persists across the rebuild, then the
    /// default-select-all rule runs for previously-empty selections.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let model = parse_schedule(&text);
        self.raw_text = text;
        self.model = model;
        self.apply_default_selection();
    }

    /// Restores the fixed built-in dataset.
    pub fn reset_to_default(&mut self) {
        log::info!("Resetting schedule to built-in dataset");
        self.raw_text = DEFAULT_CSV_DATA.to_string();
        self.model = DEFAULT_MODEL.clone();
        self.apply_default_selection();
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn model(&self) -> &ScheduleModel {
        &self.model
    }

    // --- Filter State ---

    pub fn toggle_subject_selection(&mut self, name: &str) {
        if !self.selected_subjects.remove(name) {
            self.selected_subjects.insert(name.to_string());
        }
    }

    pub fn selected_subjects(&self) -> &HashSet<String> {
        &self.selected_subjects
    }

    pub fn select_all_subjects(&mut self) {
        self.selected_subjects = self.model.subject_names().into_iter().collect();
    }

    pub fn clear_subject_selection(&mut self) {
        self.selected_subjects.clear();
    }

    pub fn set_show_instruction(&mut self, show: bool) {
        self.show_instruction = show;
    }

    pub fn show_instruction(&self) -> bool {
        self.show_instruction
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    // --- Derived ---

    /// Projection of the current model under the current filter state.
    /// Recomputed on every call; nothing is cached or invalidated.
    pub fn projected_view(&self) -> ProjectedView {
        project(
            &self.model,
            FilterOptions {
                selected_subjects: &self.selected_subjects,
                show_instruction: self.show_instruction,
            },
        )
    }

    /// Selection defaults to "everything" the first time a non-empty model
    /// meets an empty selection; an explicit deselect-all afterwards stays
    /// empty only until the next rebuild, matching the host UI's behavior.
    fn apply_default_selection(&mut self) {
        if self.selected_subjects.is_empty() && !self.model.subjects.is_empty() {
            self.select_all_subjects();
            log::debug!(
                "Empty selection: defaulting to all {} subjects",
                self.selected_subjects.len()
            );
        }
    }
}
