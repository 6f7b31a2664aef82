use super::employee::Employee;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled work interval for a position, optionally assigned.
///
/// `start_time < end_time` is not enforced and shifts may overlap freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub position: String,
    pub employee_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewShift {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub position: String,
    pub employee_id: Option<i64>,
}

impl NewShift {
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime, position: &str) -> Self {
        NewShift {
            date,
            start_time,
            end_time,
            position: position.to_string(),
            employee_id: None,
        }
    }

    pub fn assign(mut self, employee_id: i64) -> Self {
        self.employee_id = Some(employee_id);
        self
    }
}

/// Optional filters for listing shifts. Both date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShiftFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub employee_id: Option<i64>,
}

impl ShiftFilter {
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        ShiftFilter {
            start_date: Some(start_date),
            end_date: Some(end_date),
            employee_id: None,
        }
    }

    pub fn for_employee(employee_id: i64) -> Self {
        ShiftFilter {
            employee_id: Some(employee_id),
            ..Default::default()
        }
    }
}

/// A shift joined with its assigned employee, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftView {
    #[serde(flatten)]
    pub shift: Shift,
    pub employee: Option<Employee>,
}
