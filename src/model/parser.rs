// File: ./src/model/parser.rs
use crate::model::classifier::classify;
use crate::model::item::{Event, MonthColumn, ScheduleModel, Subject, SUMMER_BREAK_LABEL};
use std::collections::HashMap;

/// Splits one record line into fields, honoring quoted segments that
/// contain the delimiter.
///
/// A `"` toggles quote state and is never emitted; a `,` outside quotes
/// flushes, inside quotes it is literal. Fields are trimmed, and the final
/// field is always flushed even when empty so trailing empty columns keep
/// their position. Unbalanced quotes are not an error: the toggle runs
/// wherever the quote appears, including mid-field, and there is no `""`
/// escaping. Deterministic for every input.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Unwraps one layer of leading/trailing literal `"` characters.
/// Each side is stripped independently, at most once.
fn unwrap_field(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Parses raw comma-separated text into a [`ScheduleModel`].
///
/// Row 0 is the header: field 0 (nominally "Subject") is discarded, each
/// later field becomes a month column, with blank cells standing for the
/// non-teaching gap ("Summer Break"). Every later row is one subject; rows
/// with fewer than two fields are dropped. Malformed input degrades
/// gracefully (ragged rows, unbalanced quotes); the contract is total and
/// never errors.
pub fn parse_schedule(raw: &str) -> ScheduleModel {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ScheduleModel::default();
    }

    let mut lines = trimmed.lines();
    let Some(header_line) = lines.next() else {
        return ScheduleModel::default();
    };

    let header = split_line(header_line);
    let months: Vec<MonthColumn> = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(j, label)| MonthColumn {
            index: j,
            name: if label.is_empty() {
                SUMMER_BREAK_LABEL.to_string()
            } else {
                label.clone()
            },
        })
        .collect();

    let mut subjects = Vec::new();
    for line in lines {
        let cols = split_line(line);
        if cols.len() < 2 {
            // Blank-line tolerance: no subject name plus at least one field.
            continue;
        }

        let mut events = HashMap::new();
        for month in &months {
            // Short rows pad with absence; fields beyond the header width
            // are ignored because only header indices are visited.
            let cell = cols.get(month.index).map_or("", |c| unwrap_field(c));
            if cell.is_empty() {
                continue;
            }
            events.insert(
                month.index,
                Event {
                    month: month.name.clone(),
                    text: cell.to_string(),
                    severity: classify(cell),
                },
            );
        }

        subjects.push(Subject {
            name: cols[0].trim().to_string(),
            events,
        });
    }

    log::debug!(
        "Parsed schedule: {} subjects x {} months",
        subjects.len(),
        months.len()
    );
    ScheduleModel { subjects, months }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        assert_eq!(split_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn trailing_empty_field_is_preserved() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line("  a , b  "), vec!["a", "b"]);
    }

    #[test]
    fn unbalanced_quote_is_deterministic() {
        // Quote toggles wherever it appears; the rest of the line becomes
        // one quoted run. Quirk, not a contract, but it must be stable.
        assert_eq!(split_line("a,\"b,c"), vec!["a", "b,c"]);
        assert_eq!(split_line("mid\"dle,x"), vec!["middle,x"]);
    }

    #[test]
    fn blank_header_cell_becomes_summer_break() {
        let model = parse_schedule("Subject,Aug,,Oct");
        let names: Vec<(usize, &str)> = model
            .months
            .iter()
            .map(|m| (m.index, m.name.as_str()))
            .collect();
        assert_eq!(names, vec![(1, "Aug"), (2, "Summer Break"), (3, "Oct")]);
    }

    #[test]
    fn empty_input_yields_empty_model() {
        assert!(parse_schedule("").is_empty());
        assert!(parse_schedule("   \n  ").is_empty());
    }

    #[test]
    fn short_rows_are_dropped() {
        let model = parse_schedule("Subject,Aug\nMath,Instruction\n\nJustOneField\n");
        assert_eq!(model.subject_names(), vec!["Math"]);
    }

    #[test]
    fn ragged_rows_degrade_gracefully() {
        // Missing trailing fields mean no event; extra fields are ignored.
        let model = parse_schedule("Subject,Aug,Sep\nMath,Exam\nArt,Draft,Exam,Extra");
        let math = model.subject("Math").unwrap();
        assert!(math.event_for(1).is_some());
        assert!(math.event_for(2).is_none());

        let art = model.subject("Art").unwrap();
        assert_eq!(art.events.len(), 2);
    }

    #[test]
    fn empty_cells_create_no_events() {
        let model = parse_schedule("Subject,Aug,Sep\nMath,,Exam");
        let math = model.subject("Math").unwrap();
        assert!(math.event_for(1).is_none());
        assert_eq!(math.event_for(2).unwrap().severity, Severity::High);
    }

    #[test]
    fn quoted_cell_is_unwrapped_and_classified_whole() {
        let model = parse_schedule(
            "Subject,Nov\nMath,\"IA Work time, IA (Draft) Due for Feedback\"",
        );
        let event = model.subject("Math").unwrap().event_for(1).unwrap();
        assert_eq!(event.text, "IA Work time, IA (Draft) Due for Feedback");
        assert_eq!(event.severity, Severity::Medium);
        assert_eq!(event.month, "Nov");
    }

    #[test]
    fn parse_is_idempotent() {
        let raw = "Subject,Aug,,Oct\nMath,Instruction,,Exam\nArt,\"a,b\",c";
        assert_eq!(parse_schedule(raw), parse_schedule(raw));
    }

    #[test]
    fn event_less_subjects_are_kept() {
        let model = parse_schedule("Subject,Aug\nMath,\nArt,Exam");
        assert_eq!(model.subject_names(), vec!["Math", "Art"]);
        assert!(model.subject("Math").unwrap().events.is_empty());
    }
}
