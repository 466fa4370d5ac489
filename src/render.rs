//! Terminal rendering for the week view model.
//!
//! Extension traits that turn roster-core view structs into colored text
//! using owo_colors.

use owo_colors::OwoColorize;
use roster_core::store::SaveStatus;
use roster_core::view::{Header, LegendEntry, ShiftCategory, Table, WeekView, classify};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the shift category
fn paint(category: Option<ShiftCategory>, text: &str) -> String {
    match category {
        Some(ShiftCategory::RestDay) => text.dimmed().to_string(),
        Some(ShiftCategory::Night) => text.blue().to_string(),
        Some(ShiftCategory::Mid) => text.yellow().to_string(),
        Some(ShiftCategory::Early) => text.green().to_string(),
        None => text.to_string(),
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Gap between table columns
const GUTTER: &str = "  ";

impl Render for Header {
    fn render(&self) -> String {
        self.week_range_label.bold().to_string()
    }
}

impl Render for LegendEntry {
    fn render(&self) -> String {
        let code = paint(classify(&self.code), &self.code);
        if self.time_range.is_empty() {
            code
        } else {
            format!("{} {}", code, self.time_range.dimmed())
        }
    }
}

impl Render for Table {
    fn render(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|r| width(&r.label))
            .chain([width(&self.corner_label)])
            .max()
            .unwrap_or(0);

        let column_widths: [usize; 7] = std::array::from_fn(|c| {
            self.rows
                .iter()
                .flat_map(|r| [width(&r.cells[c].code), width(&r.cells[c].time_range)])
                .chain([width(&self.columns[c])])
                .max()
                .unwrap_or(0)
        });

        let mut lines = Vec::new();

        // Pad before coloring so escape codes don't count towards widths
        let mut header = format!("{:<label_width$}", self.corner_label);
        for (column, w) in self.columns.iter().zip(column_widths) {
            header.push_str(GUTTER);
            header.push_str(&format!("{:<w$}", column));
        }
        lines.push(header.bold().to_string());

        for row in &self.rows {
            let mut codes = format!("{:<label_width$}", row.label);
            let mut times = " ".repeat(label_width);

            for (cell, w) in row.cells.iter().zip(column_widths) {
                codes.push_str(GUTTER);
                codes.push_str(&paint(cell.category, &format!("{:<w$}", cell.code)));
                times.push_str(GUTTER);
                times.push_str(&format!("{:<w$}", cell.time_range).dimmed().to_string());
            }

            lines.push(codes);
            lines.push(times);
        }

        lines.join("\n")
    }
}

impl Render for WeekView {
    fn render(&self) -> String {
        let legend: Vec<String> = self.legend.iter().map(Render::render).collect();

        format!(
            "{}\n\n{}\n\n{} {}",
            self.header.render(),
            self.table.render(),
            "Legend:".dimmed(),
            legend.join("   ")
        )
    }
}

/// Print the non-fatal notice for a save that did not reach storage
pub fn report_status(status: &SaveStatus) {
    if let Some(notice) = status.notice() {
        eprintln!("{}", notice.yellow());
    }
}
