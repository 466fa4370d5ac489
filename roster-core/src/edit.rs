//! Edit drafts for names and for the roster itself.
//!
//! A draft is a snapshot of the document taken when the editor opens. Committing
//! it builds a whole new document; dropping it is a cancel.

use tracing::warn;

use crate::date_math::{from_iso_date, to_iso_date};
use crate::document::{PatternRow, ROTATION_WEEKS, ScheduleDocument, ShiftDefinition, ShiftTable, normalize_code};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesDraft {
    pub names: [String; ROTATION_WEEKS],
}

impl NamesDraft {
    pub fn open(doc: &ScheduleDocument) -> Self {
        NamesDraft {
            names: doc.names.clone(),
        }
    }

    /// Field label for slot `index`, e.g. "Week 1".
    pub fn label(index: usize) -> String {
        format!("Week {}", index + 1)
    }

    pub fn set(&mut self, index: usize, name: &str) {
        if let Some(slot) = self.names.get_mut(index) {
            *slot = name.to_string();
        }
    }

    pub fn commit(self, doc: &ScheduleDocument) -> ScheduleDocument {
        ScheduleDocument {
            names: self.names.map(|name| name.trim().to_string()),
            ..doc.clone()
        }
    }
}

/// One editable line of the shift table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftRow {
    pub code: String,
    pub label: String,
    pub start: String,
    pub end: String,
}

impl ShiftRow {
    pub fn new(code: &str, label: &str, start: &str, end: &str) -> Self {
        ShiftRow {
            code: code.to_string(),
            label: label.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDraft {
    /// ISO date text; blank keeps the current anchor.
    pub anchor: String,
    pub shifts: Vec<ShiftRow>,
    pub pattern: [PatternRow; ROTATION_WEEKS],
}

impl RosterDraft {
    pub fn open(doc: &ScheduleDocument) -> Self {
        RosterDraft {
            anchor: to_iso_date(doc.anchor),
            shifts: doc
                .shifts
                .iter()
                .map(|(code, def)| ShiftRow::new(code, &def.label, &def.start, &def.end))
                .collect(),
            pattern: doc.pattern.clone(),
        }
    }

    pub fn add_shift(&mut self, row: ShiftRow) {
        self.shifts.push(row);
    }

    pub fn remove_shift(&mut self, index: usize) -> Option<ShiftRow> {
        (index < self.shifts.len()).then(|| self.shifts.remove(index))
    }

    pub fn set_cell(&mut self, row: usize, col: usize, code: &str) {
        if let Some(cell) = self.pattern.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = code.to_string();
        }
    }

    /// Build the next document. Names are carried over untouched.
    pub fn commit(self, doc: &ScheduleDocument) -> ScheduleDocument {
        let anchor = match self.anchor.trim() {
            "" => doc.anchor,
            text => from_iso_date(text).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring anchor, keeping {}", doc.anchor);
                doc.anchor
            }),
        };

        let mut shifts = ShiftTable::new();
        for row in self.shifts {
            let code = normalize_code(&row.code);
            if code.is_empty() {
                continue;
            }
            // a repeated code overwrites the earlier definition in place
            shifts.insert(
                code,
                ShiftDefinition::new(row.label.trim(), row.start.trim(), row.end.trim()),
            );
        }

        let pattern = self.pattern.map(|row| row.map(|cell| normalize_code(&cell)));

        ScheduleDocument {
            anchor,
            shifts,
            pattern,
            names: doc.names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doc() -> ScheduleDocument {
        ScheduleDocument::default_for(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_names_commit_trims_and_replaces() {
        let doc = doc();
        let mut draft = NamesDraft::open(&doc);
        assert_eq!(NamesDraft::label(0), "Week 1");

        draft.set(0, "  Ana ");
        draft.set(6, "");
        draft.set(9, "ignored");
        let next = draft.commit(&doc);

        assert_eq!(next.names[0], "Ana");
        assert_eq!(next.names[1], "Bob");
        assert_eq!(next.names[6], "");
        assert_eq!(next.shifts, doc.shifts);
        assert_eq!(next.pattern, doc.pattern);
    }

    #[test]
    fn test_roster_open_mirrors_document() {
        let doc = doc();
        let draft = RosterDraft::open(&doc);
        assert_eq!(draft.anchor, "2026-10-19");
        assert_eq!(draft.shifts[1], ShiftRow::new("EARLY", "Early", "05:00", "15:00"));
        assert_eq!(draft.pattern, doc.pattern);
        assert_eq!(draft.commit(&doc), doc);
    }

    #[test]
    fn test_blank_anchor_keeps_previous() {
        let doc = doc();
        let mut draft = RosterDraft::open(&doc);
        draft.anchor = "  ".into();
        draft.add_shift(ShiftRow::new("late", "Late", "14:00", "22:00"));
        draft.set_cell(0, 0, "late");

        let next = draft.commit(&doc);
        assert_eq!(next.anchor, doc.anchor);
        assert!(next.shifts.contains_key("LATE"));
        assert_eq!(next.pattern[0][0], "LATE");
    }

    #[test]
    fn test_new_anchor_is_applied() {
        let doc = doc();
        let mut draft = RosterDraft::open(&doc);
        draft.anchor = "2026-11-02".into();
        assert_eq!(
            draft.commit(&doc).anchor,
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap()
        );
    }

    #[test]
    fn test_unreadable_anchor_keeps_previous() {
        let doc = doc();
        let mut draft = RosterDraft::open(&doc);
        draft.anchor = "next monday".into();
        assert_eq!(draft.commit(&doc).anchor, doc.anchor);
    }

    #[test]
    fn test_shift_rows_are_normalized() {
        let doc = doc();
        let mut draft = RosterDraft::open(&doc);
        draft.shifts = vec![
            ShiftRow::new(" early ", " Early ", " 06:00 ", "14:00 "),
            ShiftRow::new("", "Dropped", "01:00", "02:00"),
            ShiftRow::new("   ", "Dropped too", "", ""),
            ShiftRow::new("rdo", "Off", "", ""),
            ShiftRow::new("EARLY", "Earlier", "04:00", "12:00"),
        ];

        let next = draft.commit(&doc);
        let codes: Vec<_> = next.shifts.keys().map(String::as_str).collect();
        assert_eq!(codes, ["EARLY", "RDO"]);
        assert_eq!(next.shifts["EARLY"], ShiftDefinition::new("Earlier", "04:00", "12:00"));
        assert_eq!(next.shifts["RDO"], ShiftDefinition::new("Off", "", ""));
    }

    #[test]
    fn test_pattern_cells_trimmed_and_upper_cased_without_lookup() {
        let doc = doc();
        let mut draft = RosterDraft::open(&doc);
        draft.set_cell(3, 4, " swing ");
        draft.set_cell(6, 6, "");

        let next = draft.commit(&doc);
        assert_eq!(next.pattern[3][4], "SWING");
        assert_eq!(next.pattern[6][6], "");
        assert!(!next.shifts.contains_key("SWING"));
        assert_eq!(next.names, doc.names);
    }

    #[test]
    fn test_remove_shift() {
        let mut draft = RosterDraft::open(&doc());
        assert_eq!(draft.remove_shift(0).map(|r| r.code), Some("RDO".to_string()));
        assert_eq!(draft.remove_shift(10), None);
        assert_eq!(draft.shifts.len(), 3);
    }
}
