// File: ./src/model/mod.rs
pub mod classifier;
pub mod display;
pub mod item;
pub mod parser;

pub use item::{Event, MonthColumn, ScheduleModel, Severity, Subject, SUMMER_BREAK_LABEL};
