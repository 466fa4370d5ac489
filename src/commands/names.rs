use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use roster_core::document::ROTATION_WEEKS;
use roster_core::edit::NamesDraft;
use roster_core::session::{Saved, Session};

use super::prompt_text;
use crate::render::{Render, report_status};

pub fn run(session: &mut Session, names: Vec<String>) -> Result<()> {
    let saved = if names.is_empty() {
        match edit_interactive(session)? {
            Some(saved) => saved,
            None => {
                println!("{}", "  Names unchanged".dimmed());
                return Ok(());
            }
        }
    } else {
        if names.len() != ROTATION_WEEKS {
            anyhow::bail!(
                "Expected {} names (one per rotation week), got {}",
                ROTATION_WEEKS,
                names.len()
            );
        }
        let mut draft = session.edit_names();
        for (i, name) in names.iter().enumerate() {
            draft.set(i, name);
        }
        session.save_names(draft)
    };

    report_status(&saved.status);
    println!("{}", saved.view.render());
    Ok(())
}

/// Prompt for all seven names. Returns `None` when the user cancels.
pub fn edit_interactive(session: &mut Session) -> Result<Option<Saved>> {
    let mut draft = session.edit_names();

    for i in 0..ROTATION_WEEKS {
        let current = draft.names[i].clone();
        let name = prompt_text(&format!("  {}", NamesDraft::label(i)), &current)?;
        draft.set(i, &name);
    }

    let confirmed = Confirm::new()
        .with_prompt("  Save names?")
        .default(true)
        .interact()?;

    if !confirmed {
        return Ok(None);
    }

    Ok(Some(session.save_names(draft)))
}
