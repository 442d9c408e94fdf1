//! Daily challenge rotation.
//!
//! A pure function of the calendar date: day-of-year modulo the candidate
//! count. No "today's pick" is ever stored -- repeated calls within one
//! day agree, and the pick changes only at local-midnight rollover.

use chrono::{Datelike, Local, NaiveDate};

/// Candidate for `date`, or None for an empty list.
///
/// `dayOfYear` is 1 for Jan 1, so day 47 over 3 candidates picks
/// index 47 % 3 = 2.
pub fn pick_for_date<T>(candidates: &[T], date: NaiveDate) -> Option<&T> {
    if candidates.is_empty() {
        return None;
    }
    let index = date.ordinal() as usize % candidates.len();
    candidates.get(index)
}

/// Today's candidate per the local calendar.
pub fn pick_today<T>(candidates: &[T]) -> Option<&T> {
    pick_for_date(candidates, Local::now().date_naive())
}
