// File: ./src/model/classifier.rs
use crate::model::Severity;

const HIGH_MARKERS: &[&str] = &["final", "exam", "delivered"];
const MEDIUM_MARKERS: &[&str] = &["draft", "feedback"];
const LOW_MARKERS: &[&str] = &["work time", "ia"];

/// Maps an event description to a severity tag.
///
/// Case-insensitive substring test, first match wins, checked in fixed
/// priority order. The order matters: "IA (Final) Delivered" must be High
/// (the "final" rule fires before the low-priority "ia" rule), and
/// "IA (Draft) Due for Feedback" must be Medium. Matching is substring,
/// not whole-word: "ia" hits inside any larger token containing it.
pub fn classify(text: &str) -> Severity {
    let lower = text.to_lowercase();
    if HIGH_MARKERS.iter().any(|m| lower.contains(m)) {
        Severity::High
    } else if MEDIUM_MARKERS.iter().any(|m| lower.contains(m)) {
        Severity::Medium
    } else if LOW_MARKERS.iter().any(|m| lower.contains(m)) {
        Severity::Low
    } else {
        Severity::Instruction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_applied() {
        assert_eq!(classify("IA (Final) Delivered"), Severity::High);
        assert_eq!(classify("IA (Draft) Due for Feedback"), Severity::Medium);
        assert_eq!(classify("IA Work time"), Severity::Low);
        assert_eq!(classify("Instruction"), Severity::Instruction);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("EXAMINATION PAPER"), Severity::High);
        assert_eq!(classify("hl essay (draft) due"), Severity::Medium);
    }

    #[test]
    fn ia_matches_as_substring() {
        // Broad by design: any token containing "ia" is at least Low.
        assert_eq!(classify("Brazilian field trip"), Severity::Low);
        assert_eq!(classify("Revision week"), Severity::Instruction);
    }

    #[test]
    fn empty_text_falls_through_to_instruction() {
        assert_eq!(classify(""), Severity::Instruction);
    }
}
