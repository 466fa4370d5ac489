//! The persisted schedule document.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::date_math::start_of_week_monday;
use crate::error::{RosterError, RosterResult};

/// Number of rotation weeks, which is also the number of people and pattern rows.
pub const ROTATION_WEEKS: usize = 7;

/// One rotation week of shift codes, Monday to Sunday.
pub type PatternRow = [String; 7];

/// Shift codes in the order they were defined.
pub type ShiftTable = IndexMap<String, ShiftDefinition>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftDefinition {
    #[serde(default)]
    pub label: String,
    /// "HH:MM", or empty for a non-working code
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl ShiftDefinition {
    pub fn new(label: &str, start: &str, end: &str) -> Self {
        ShiftDefinition {
            label: label.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn is_working(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    /// "05:00–15:00", or `None` when either end is missing.
    pub fn time_range(&self) -> Option<String> {
        self.is_working()
            .then(|| format!("{}–{}", self.start, self.end))
    }
}

/// Canonical form of a shift code as typed by a user.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// The Monday that counts as rotation week 1.
    pub anchor: NaiveDate,
    pub shifts: ShiftTable,
    pub pattern: [PatternRow; ROTATION_WEEKS],
    pub names: [String; ROTATION_WEEKS],
}

impl ScheduleDocument {
    /// The built-in roster used on first run, anchored on the week of `today`.
    pub fn default_for(today: NaiveDate) -> Self {
        let mut shifts = ShiftTable::new();
        shifts.insert("RDO".into(), ShiftDefinition::new("RDO", "", ""));
        shifts.insert("EARLY".into(), ShiftDefinition::new("Early", "05:00", "15:00"));
        shifts.insert("MID".into(), ShiftDefinition::new("Mid", "10:00", "18:00"));
        shifts.insert("NIGHT".into(), ShiftDefinition::new("Night", "22:00", "06:00"));

        let pattern = [
            ["EARLY", "EARLY", "EARLY", "EARLY", "EARLY", "RDO", "RDO"],
            ["MID", "MID", "MID", "MID", "MID", "RDO", "RDO"],
            ["NIGHT", "NIGHT", "NIGHT", "NIGHT", "NIGHT", "RDO", "RDO"],
            ["RDO", "RDO", "EARLY", "EARLY", "EARLY", "EARLY", "EARLY"],
            ["RDO", "RDO", "MID", "MID", "MID", "MID", "MID"],
            ["RDO", "RDO", "NIGHT", "NIGHT", "NIGHT", "NIGHT", "NIGHT"],
            ["EARLY", "RDO", "RDO", "MID", "RDO", "NIGHT", "RDO"],
        ]
        .map(|row| row.map(String::from));

        let names = ["Alice", "Bob", "Charlie", "Dylan", "Eve", "Frank", "Grace"]
            .map(String::from);

        ScheduleDocument {
            // only the first days of the calendar have no Monday before them
            anchor: start_of_week_monday(today).unwrap_or(today),
            shifts,
            pattern,
            names,
        }
    }

    /// Parse a stored document. Shapes are enforced by the array types; the
    /// shift-table rules are checked afterwards.
    pub fn from_json(raw: &str) -> RosterResult<Self> {
        let document: ScheduleDocument = serde_json::from_str(raw)?;
        document.validate()?;
        Ok(document)
    }

    pub fn to_json(&self) -> RosterResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> RosterResult<()> {
        for code in self.shifts.keys() {
            if code.is_empty() {
                return Err(RosterError::InvalidDocument("empty shift code".into()));
            }
            if *code != code.to_uppercase() {
                return Err(RosterError::InvalidDocument(format!(
                    "shift code '{}' is not upper-case",
                    code
                )));
            }
        }
        Ok(())
    }

    /// Definition for a pattern code, if one exists.
    pub fn shift(&self, code: &str) -> Option<&ShiftDefinition> {
        self.shifts.get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use chrono::Datelike;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()
    }

    #[test]
    fn test_default_document() {
        let doc = ScheduleDocument::default_for(today());

        assert_eq!(doc.anchor, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(doc.anchor.weekday(), Weekday::Mon);

        let codes: Vec<_> = doc.shifts.keys().map(String::as_str).collect();
        assert_eq!(codes, ["RDO", "EARLY", "MID", "NIGHT"]);
        assert_eq!(doc.shifts.values().filter(|s| !s.is_working()).count(), 1);

        assert_eq!(doc.pattern[6], ["EARLY", "RDO", "RDO", "MID", "RDO", "NIGHT", "RDO"]);
        assert_eq!(doc.names[0], "Alice");
        assert_eq!(doc.names[6], "Grace");
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_time_range() {
        assert_eq!(
            ShiftDefinition::new("Night", "22:00", "06:00").time_range().as_deref(),
            Some("22:00–06:00")
        );
        assert_eq!(ShiftDefinition::new("RDO", "", "").time_range(), None);
        assert_eq!(ShiftDefinition::new("Half", "09:00", "").time_range(), None);
    }

    #[test]
    fn test_json_round_trip_keeps_shift_order() {
        let mut doc = ScheduleDocument::default_for(today());
        doc.shifts.shift_remove("RDO");
        doc.shifts.insert("RDO".into(), ShiftDefinition::new("Off", "", ""));

        let json = doc.to_json().unwrap();
        assert!(json.contains("\"anchor\":\"2026-10-19\""));

        let parsed = ScheduleDocument::from_json(&json).unwrap();
        let codes: Vec<_> = parsed.shifts.keys().map(String::as_str).collect();
        assert_eq!(codes, ["EARLY", "MID", "NIGHT", "RDO"]);
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_rejects_wrong_shapes() {
        let doc = ScheduleDocument::default_for(today());
        let mut value = serde_json::to_value(&doc).unwrap();
        value["names"].as_array_mut().unwrap().pop();
        assert!(ScheduleDocument::from_json(&value.to_string()).is_err());

        let mut value = serde_json::to_value(&doc).unwrap();
        value["pattern"][3].as_array_mut().unwrap().push("MID".into());
        assert!(ScheduleDocument::from_json(&value.to_string()).is_err());

        let mut value = serde_json::to_value(&doc).unwrap();
        value["anchor"] = "2026-13-01".into();
        assert!(ScheduleDocument::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_from_json_rejects_lower_case_codes() {
        let mut doc = ScheduleDocument::default_for(today());
        doc.shifts.insert("late".into(), ShiftDefinition::new("Late", "14:00", "22:00"));
        let json = doc.to_json().unwrap();
        assert!(matches!(
            ScheduleDocument::from_json(&json),
            Err(RosterError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_missing_shift_fields_default_to_empty() {
        let doc = ScheduleDocument::default_for(today());
        let mut value = serde_json::to_value(&doc).unwrap();
        value["shifts"]["RDO"] = serde_json::json!({ "label": "RDO" });
        let parsed = ScheduleDocument::from_json(&value.to_string()).unwrap();
        assert_eq!(parsed.shifts["RDO"], ShiftDefinition::new("RDO", "", ""));
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  night "), "NIGHT");
        assert_eq!(normalize_code("   "), "");
    }
}
