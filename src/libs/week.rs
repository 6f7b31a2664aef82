//! Monday-to-Sunday week boundaries.
//!
//! A week always starts on the Monday on or before the given date and ends
//! six days later, independent of month or year boundaries.

use chrono::{Datelike, Days, NaiveDate};

/// An inclusive Monday..=Sunday date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl Week {
    /// Computes the week `date` belongs to.
    ///
    /// Returns `None` only when the Monday or Sunday would fall outside the
    /// range chrono can represent.
    pub fn containing(date: NaiveDate) -> Option<Week> {
        // weekday index: Monday = 0 .. Sunday = 6
        let offset = date.weekday().num_days_from_monday() as u64;
        let monday = date.checked_sub_days(Days::new(offset))?;
        let sunday = monday.checked_add_days(Days::new(6))?;
        Some(Week { monday, sunday })
    }

}
