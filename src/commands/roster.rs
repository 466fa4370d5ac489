use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use roster_core::date_math::{WEEKDAY_LABELS, from_iso_date};
use roster_core::document::{PatternRow, ROTATION_WEEKS};
use roster_core::edit::ShiftRow;
use roster_core::session::{Saved, Session};

use super::{prompt_text, prompt_with_retry};
use crate::render::{Render, report_status};

/// Stands in for an empty pattern cell when a week is typed on one line
const EMPTY_CELL: &str = "-";

pub fn run(session: &mut Session) -> Result<()> {
    match edit_interactive(session)? {
        Some(saved) => {
            report_status(&saved.status);
            println!("{}", saved.view.render());
        }
        None => println!("{}", "  Roster unchanged".dimmed()),
    }
    Ok(())
}

/// Walk through anchor, shift table and pattern. Returns `None` when the user
/// cancels.
pub fn edit_interactive(session: &mut Session) -> Result<Option<Saved>> {
    let mut draft = session.edit_roster();

    // --- Anchor ---
    draft.anchor = prompt_with_retry(
        "  Anchor Monday (blank keeps current)",
        &draft.anchor,
        |input| {
            if !input.trim().is_empty() {
                from_iso_date(input)?;
            }
            Ok(input.trim().to_string())
        },
    )?;

    // --- Shifts ---
    println!("{}", "  Shift codes (clear a code to remove it)".dimmed());
    let mut shifts = Vec::new();
    for row in &draft.shifts {
        if let Some(edited) = prompt_shift(row)? {
            shifts.push(edited);
        }
    }
    while Confirm::new()
        .with_prompt("  Add a shift code?")
        .default(false)
        .interact()?
    {
        if let Some(added) = prompt_shift(&ShiftRow::default())? {
            shifts.push(added);
        }
    }
    draft.shifts = shifts;

    // --- Pattern ---
    println!(
        "{}",
        format!(
            "  Pattern, one rotation week per line ({}), '{}' for an empty day",
            WEEKDAY_LABELS.join(" "),
            EMPTY_CELL
        )
        .dimmed()
    );
    for r in 0..ROTATION_WEEKS {
        draft.pattern[r] = prompt_with_retry(
            &format!("  Week {}", r + 1),
            &format_pattern_row(&draft.pattern[r]),
            parse_pattern_row,
        )?;
    }

    let confirmed = Confirm::new()
        .with_prompt("  Save roster?")
        .default(true)
        .interact()?;

    if !confirmed {
        return Ok(None);
    }

    Ok(Some(session.save_roster(draft)))
}

fn prompt_shift(row: &ShiftRow) -> Result<Option<ShiftRow>> {
    let code = prompt_text("    Code", &row.code)?;
    if code.trim().is_empty() {
        return Ok(None);
    }

    let label = prompt_text("    Label", &row.label)?;
    let start = prompt_text("    Start (HH:MM, blank for a day off)", &row.start)?;
    let end = prompt_text("    End (HH:MM)", &row.end)?;

    Ok(Some(ShiftRow::new(&code, &label, &start, &end)))
}

fn format_pattern_row(row: &PatternRow) -> String {
    row.iter()
        .map(|cell| if cell.is_empty() { EMPTY_CELL } else { cell.as_str() })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_pattern_row(input: &str) -> Result<PatternRow> {
    let cells: Vec<&str> = input.split_whitespace().collect();
    let cells: [&str; 7] = cells
        .try_into()
        .map_err(|cells: Vec<&str>| anyhow::anyhow!("Expected 7 codes (Mon..Sun), got {}", cells.len()))?;

    Ok(cells.map(|cell| if cell == EMPTY_CELL { String::new() } else { cell.to_string() }))
}
