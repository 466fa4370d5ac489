//! Projection of a schedule week into a view model.
//!
//! Everything here is a pure function of the document and the displayed week;
//! presentation layers only ever read the resulting structs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date_math::{day_column_label, format_long_date, to_iso_date};
use crate::document::{ROTATION_WEEKS, ScheduleDocument, ShiftTable};
use crate::rotation::{current_rotation_week_number, pattern_code, rotated_names_for_week};

pub const CORNER_LABEL: &str = "Roster Week";

/// Styling hint derived from the text of a shift code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    RestDay,
    Night,
    Mid,
    Early,
}

/// First matching substring wins: RDO, then NIGHT, then MID, then EARLY.
pub fn classify(code: &str) -> Option<ShiftCategory> {
    let upper = code.to_uppercase();
    [
        ("RDO", ShiftCategory::RestDay),
        ("NIGHT", ShiftCategory::Night),
        ("MID", ShiftCategory::Mid),
        ("EARLY", ShiftCategory::Early),
    ]
    .into_iter()
    .find(|(needle, _)| upper.contains(needle))
    .map(|(_, category)| category)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub code: String,
    /// Empty for non-working codes.
    pub time_range: String,
}

impl LegendEntry {
    pub fn text(&self) -> String {
        if self.time_range.is_empty() {
            self.code.clone()
        } else {
            format!("{} {}", self.code, self.time_range)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub week_range_label: String,
    pub current_week_number: u8,
    /// ISO date of the displayed Monday, for date pickers.
    pub jump_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub code: String,
    pub time_range: String,
    pub category: Option<ShiftCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub cells: [Cell; 7],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub corner_label: String,
    pub columns: [String; 7],
    pub rows: [Row; ROTATION_WEEKS],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekView {
    pub header: Header,
    pub legend: Vec<LegendEntry>,
    pub table: Table,
}

pub fn build_legend(shifts: &ShiftTable) -> Vec<LegendEntry> {
    shifts
        .iter()
        .map(|(code, def)| LegendEntry {
            code: code.clone(),
            time_range: def.time_range().unwrap_or_default(),
        })
        .collect()
}

/// `week` is the displayed week, Monday first.
pub fn build_header(doc: &ScheduleDocument, week: &[NaiveDate; 7], today: NaiveDate) -> Header {
    let current_week_number = current_rotation_week_number(doc, today);
    let [view_monday, .., sunday] = *week;

    Header {
        week_range_label: format!(
            "Week of {} – {} · Current Week {}",
            format_long_date(view_monday),
            format_long_date(sunday),
            current_week_number
        ),
        current_week_number,
        jump_date: to_iso_date(view_monday),
    }
}

pub fn build_table(doc: &ScheduleDocument, week: &[NaiveDate; 7]) -> Table {
    let names = rotated_names_for_week(doc, week[0]);

    let columns = std::array::from_fn(|c| day_column_label(c, week[c]));
    let rows = std::array::from_fn(|r| Row {
        label: names[r].clone(),
        cells: std::array::from_fn(|c| build_cell(doc, pattern_code(doc, r, c))),
    });

    Table {
        corner_label: CORNER_LABEL.to_string(),
        columns,
        rows,
    }
}

fn build_cell(doc: &ScheduleDocument, code: &str) -> Cell {
    Cell {
        code: code.to_string(),
        time_range: doc
            .shift(code)
            .and_then(|def| def.time_range())
            .unwrap_or_default(),
        category: classify(code),
    }
}

pub fn build_view(doc: &ScheduleDocument, week: &[NaiveDate; 7], today: NaiveDate) -> WeekView {
    WeekView {
        header: build_header(doc, week, today),
        legend: build_legend(&doc.shifts),
        table: build_table(doc, week),
    }
}
