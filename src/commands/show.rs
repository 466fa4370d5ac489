use anyhow::Result;
use chrono::NaiveDate;
use roster_core::session::Session;

use crate::render::Render;

pub fn run(session: &mut Session, date: Option<NaiveDate>, offset: i64, json: bool) -> Result<()> {
    if let Some(date) = date {
        session.jump_to(date)?;
    }
    let view = session.shift_weeks(offset)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
