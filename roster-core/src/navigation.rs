//! The displayed-week pointer.

use chrono::NaiveDate;
use tracing::debug;

use crate::date_math::{DAYS_PER_WEEK, add_days, day_names, week_containing};
use crate::error::{RosterError, RosterResult};

/// Holds the displayed week, Monday to Sunday. Every day of it is a valid
/// date; a move that would leave the calendar fails and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    week: [NaiveDate; 7],
}

impl Navigator {
    /// Starts on the week containing `today`.
    pub fn new(today: NaiveDate) -> RosterResult<Self> {
        Ok(Navigator {
            week: week_containing(today)?,
        })
    }

    pub fn view_monday(&self) -> NaiveDate {
        self.week[0]
    }

    pub fn week(&self) -> &[NaiveDate; 7] {
        &self.week
    }

    pub fn prev(&mut self) -> RosterResult<()> {
        self.shift_weeks(-1)
    }

    pub fn next(&mut self) -> RosterResult<()> {
        self.shift_weeks(1)
    }

    /// Move `weeks` weeks forward, or back when negative.
    pub fn shift_weeks(&mut self, weeks: i64) -> RosterResult<()> {
        let days = weeks
            .checked_mul(DAYS_PER_WEEK)
            .ok_or_else(|| RosterError::DateOutOfRange(format!("{} {:+} weeks", self.view_monday(), weeks)))?;
        self.week = day_names(add_days(self.view_monday(), days)?)?;
        debug!(view_monday = %self.view_monday(), "moved displayed week");
        Ok(())
    }

    pub fn this_week(&mut self, today: NaiveDate) -> RosterResult<()> {
        self.jump_to(today)
    }

    /// Show the week containing `date`.
    pub fn jump_to(&mut self, date: NaiveDate) -> RosterResult<()> {
        self.week = week_containing(date)?;
        debug!(view_monday = %self.view_monday(), "jumped to week");
        Ok(())
    }
}
