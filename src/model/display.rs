// File: ./src/model/display.rs
use crate::model::item::{Event, Severity};

pub trait EventDisplay {
    fn display_text(&self) -> String;
}

impl EventDisplay for Event {
    /// Compact display string for a cell. When a cell mixes "Instruction"
    /// with a higher-priority activity (e.g. "Instruction, IA Work time"),
    /// only the activity is shown; pure Instruction cells keep their text.
    fn display_text(&self) -> String {
        if self.severity == Severity::Instruction {
            return self.text.clone();
        }
        strip_instruction_token(&self.text)
    }
}

/// ASCII case-insensitive substring search starting at `from`.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < from + n.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Removes every case-insensitive "instruction" occurrence together with
/// its immediately preceding whitespace run and one optional comma, then
/// strips a residual leading comma from the result.
fn strip_instruction_token(text: &str) -> String {
    const NEEDLE: &str = "instruction";
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(hit) = find_ignore_ascii_case(text, NEEDLE, cursor) {
        let prefix = text[cursor..hit].trim_end();
        let kept = prefix.strip_suffix(',').unwrap_or(prefix);
        out.push_str(kept);
        cursor = hit + NEEDLE.len();
    }
    out.push_str(&text[cursor..]);
    let cleaned = out.trim();
    let cleaned = cleaned
        .strip_prefix(',')
        .map_or(cleaned, |rest| rest.trim_start());
    cleaned.to_string()
}
