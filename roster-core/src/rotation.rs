//! Who works which pattern row in a given week.
//!
//! The pattern itself never moves. Each week the names shift down one row
//! relative to the previous week, the last name wrapping round to the top.

use chrono::NaiveDate;

use crate::date_math::{weeks_between, weeks_to_week_of};
use crate::document::{ROTATION_WEEKS, ScheduleDocument};

/// Non-negative remainder modulo the rotation length.
fn wrap(n: i64) -> usize {
    n.rem_euclid(ROTATION_WEEKS as i64) as usize
}

/// Weeks from the anchor to `view_monday`; negative before the anchor.
pub fn rotation_offset_for_week(doc: &ScheduleDocument, view_monday: NaiveDate) -> i64 {
    weeks_between(doc.anchor, view_monday)
}

/// The 1-based rotation week that the week holding `today` falls in.
pub fn current_rotation_week_number(doc: &ScheduleDocument, today: NaiveDate) -> u8 {
    (wrap(weeks_to_week_of(doc.anchor, today)) + 1) as u8
}

/// Names in display-row order for the week starting `view_monday`.
pub fn rotated_names_for_week(doc: &ScheduleDocument, view_monday: NaiveDate) -> [String; ROTATION_WEEKS] {
    let offset = rotation_offset_for_week(doc, view_monday);
    std::array::from_fn(|row| doc.names[wrap(row as i64 - offset)].clone())
}

/// Shift code for a pattern row and weekday column (0 = Monday).
pub fn pattern_code(doc: &ScheduleDocument, row: usize, col: usize) -> &str {
    doc.pattern
        .get(row)
        .and_then(|r| r.get(col))
        .map(String::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_math::add_days;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn doc() -> ScheduleDocument {
        let mut doc = ScheduleDocument::default_for(anchor());
        doc.names = ["A", "B", "C", "D", "E", "F", "G"].map(String::from);
        doc
    }

    #[test]
    fn test_anchor_week_is_unrotated() {
        let doc = doc();
        assert_eq!(rotation_offset_for_week(&doc, anchor()), 0);
        assert_eq!(rotated_names_for_week(&doc, anchor()), doc.names);
    }

    #[test]
    fn test_next_week_moves_names_down() {
        let doc = doc();
        let next = rotated_names_for_week(&doc, add_days(anchor(), 7).unwrap());
        assert_eq!(next, ["G", "A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_previous_week_moves_names_up() {
        let doc = doc();
        let prev = rotated_names_for_week(&doc, add_days(anchor(), -7).unwrap());
        assert_eq!(prev, ["B", "C", "D", "E", "F", "G", "A"]);
    }

    #[test]
    fn test_previous_week_is_inverse_of_next_week() {
        let doc = doc();
        let next = rotated_names_for_week(&doc, add_days(anchor(), 7).unwrap());
        let prev = rotated_names_for_week(&doc, add_days(anchor(), -7).unwrap());

        // row i of next week holds names[p(i)]; prev week must hold names[p^-1(i)]
        let index_of = |name: &String| doc.names.iter().position(|n| n == name).unwrap();
        let forward: Vec<usize> = next.iter().map(index_of).collect();
        let backward: Vec<usize> = prev.iter().map(index_of).collect();
        for i in 0..ROTATION_WEEKS {
            assert_eq!(backward[forward[i]], i);
        }
    }

    #[test]
    fn test_row_follows_previous_row_of_prior_week() {
        let doc = doc();
        for w in -10..10 {
            let this = rotated_names_for_week(&doc, add_days(anchor(), 7 * w).unwrap());
            let following = rotated_names_for_week(&doc, add_days(anchor(), 7 * (w + 1)).unwrap());
            for row in 1..ROTATION_WEEKS {
                assert_eq!(following[row], this[row - 1]);
            }
            assert_eq!(following[0], this[ROTATION_WEEKS - 1]);
        }
    }

    #[test]
    fn test_rotation_repeats_every_seven_weeks() {
        let doc = doc();
        assert_eq!(rotated_names_for_week(&doc, add_days(anchor(), 49).unwrap()), doc.names);
        assert_eq!(rotated_names_for_week(&doc, add_days(anchor(), -49).unwrap()), doc.names);
    }

    #[test]
    fn test_current_rotation_week_number_range_and_period() {
        let doc = doc();
        assert_eq!(current_rotation_week_number(&doc, anchor()), 1);
        assert_eq!(current_rotation_week_number(&doc, add_days(anchor(), 7).unwrap()), 2);
        assert_eq!(current_rotation_week_number(&doc, add_days(anchor(), -7).unwrap()), 7);

        for w in -30..30 {
            let monday = add_days(anchor(), 7 * w).unwrap();
            let n = current_rotation_week_number(&doc, monday);
            assert!((1..=7).contains(&n));
            assert_eq!(n, current_rotation_week_number(&doc, add_days(monday, 49).unwrap()));
        }
    }

    #[test]
    fn test_current_rotation_week_number_for_any_day_of_week() {
        let doc = doc();
        let monday = add_days(anchor(), 14).unwrap();
        for day in 0..7 {
            let today = add_days(monday, day).unwrap();
            assert_eq!(current_rotation_week_number(&doc, today), 3);
        }
    }

    #[test]
    fn test_pattern_code_is_not_rotated() {
        let doc = doc();
        assert_eq!(pattern_code(&doc, 0, 0), "EARLY");
        assert_eq!(pattern_code(&doc, 2, 6), "RDO");
        assert_eq!(pattern_code(&doc, 7, 0), "");
    }
}
