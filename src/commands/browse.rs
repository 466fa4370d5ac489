use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;
use roster_core::RosterResult;
use roster_core::date_math::from_iso_date;
use roster_core::session::{Saved, Session};
use roster_core::view::WeekView;

use super::{names, prompt_with_retry, roster};
use crate::render::{Render, report_status};

const ACTIONS: [&str; 7] = [
    "Previous week",
    "Next week",
    "This week",
    "Jump to date",
    "Edit names",
    "Edit roster",
    "Quit",
];

/// Interactive week browser. Every action redraws the week.
pub fn run(session: &mut Session) -> Result<()> {
    let mut view = session.render();
    let mut last_action = 1;

    loop {
        println!("\n{}\n", view.render());

        last_action = Select::new()
            .with_prompt("  Action")
            .items(&ACTIONS)
            .default(last_action)
            .interact()?;

        view = match last_action {
            0 => navigated(session.prev_week(), view),
            1 => navigated(session.next_week(), view),
            2 => navigated(session.this_week(), view),
            3 => {
                let date = prompt_with_retry("  Jump to (YYYY-MM-DD)", &view.header.jump_date, |input| {
                    Ok(from_iso_date(input)?)
                })?;
                navigated(session.jump_to(date), view)
            }
            4 => {
                let saved = names::edit_interactive(session)?;
                after_edit(session, saved)
            }
            5 => {
                let saved = roster::edit_interactive(session)?;
                after_edit(session, saved)
            }
            _ => return Ok(()),
        };
    }
}

/// A failed move is reported and the current week stays on screen.
fn navigated(result: RosterResult<WeekView>, current: WeekView) -> WeekView {
    match result {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{}", format!("  {}", e).red());
            current
        }
    }
}

fn after_edit(session: &Session, saved: Option<Saved>) -> WeekView {
    match saved {
        Some(saved) => {
            report_status(&saved.status);
            saved.view
        }
        None => session.render(),
    }
}
