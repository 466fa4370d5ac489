//! Week arithmetic on local calendar dates.
//!
//! Dates are `NaiveDate` values: a local day with no time of day attached, so a
//! daylight-saving change inside a week never moves a week boundary. Arithmetic
//! is checked; stepping outside the representable calendar is an error.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::{RosterError, RosterResult};

pub const DAYS_PER_WEEK: i64 = 7;

/// Column labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

static ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Monday of the week containing `date`. A Sunday belongs to the week that
/// started six days earlier.
pub fn start_of_week_monday(date: NaiveDate) -> RosterResult<NaiveDate> {
    add_days(date, -days_since_monday(date))
}

pub fn add_days(date: NaiveDate, n: i64) -> RosterResult<NaiveDate> {
    TimeDelta::try_days(n)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| RosterError::DateOutOfRange(format!("{} {:+} days", date, n)))
}

fn days_since_monday(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_monday())
}

fn round_to_weeks(days: i64) -> i64 {
    // remainders of 0..=3 days round down, 4..=6 round up
    (days + 3).div_euclid(DAYS_PER_WEEK)
}

/// Signed number of weeks from `a` to `b`, rounded to the nearest whole week.
pub fn weeks_between(a: NaiveDate, b: NaiveDate) -> i64 {
    round_to_weeks((b - a).num_days())
}

/// [`weeks_between`] `a` and the Monday of the week holding `date`. Counted in
/// days, so it holds even where that Monday is not a representable date.
pub fn weeks_to_week_of(a: NaiveDate, date: NaiveDate) -> i64 {
    round_to_weeks((date - a).num_days() - days_since_monday(date))
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn from_iso_date(s: &str) -> RosterResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|_| RosterError::InvalidDate(s.to_string()))
}

/// Fixed English format such as "Mon 19 Oct 2026", whatever the user's locale.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%a %-d %b %Y").to_string()
}

/// The seven dates of the week starting at `monday`. Fails when the week runs
/// past the last representable date.
pub fn day_names(monday: NaiveDate) -> RosterResult<[NaiveDate; 7]> {
    let mut days = [monday; 7];
    for (i, day) in days.iter_mut().enumerate().skip(1) {
        *day = add_days(monday, i as i64)?;
    }
    Ok(days)
}

/// The whole week containing `date`, Monday first.
pub fn week_containing(date: NaiveDate) -> RosterResult<[NaiveDate; 7]> {
    day_names(start_of_week_monday(date)?)
}

/// Table column label like "Mon 19/10".
pub fn day_column_label(weekday_index: usize, date: NaiveDate) -> String {
    format!("{} {}", WEEKDAY_LABELS[weekday_index % 7], date.format("%d/%m"))
}
