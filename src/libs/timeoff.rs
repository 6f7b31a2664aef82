use super::employee::Employee;
use super::error::ScheduleError;
use super::messages::Message;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval state of a time-off request.
///
/// Requests start as `Pending`. Approve and reject may be applied from any
/// state, including an already decided one; the last decision wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimeOffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOffStatus::Pending => "pending",
            TimeOffStatus::Approved => "approved",
            TimeOffStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TimeOffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOffStatus {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TimeOffStatus::Pending),
            "approved" => Ok(TimeOffStatus::Approved),
            "rejected" => Ok(TimeOffStatus::Rejected),
            other => Err(ScheduleError::Validation(Message::UnknownTimeOffStatus(other.to_string()))),
        }
    }
}

/// The two manager actions on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOffDecision {
    Approve,
    Reject,
}

impl TimeOffDecision {
    pub fn status(self) -> TimeOffStatus {
        match self {
            TimeOffDecision::Approve => TimeOffStatus::Approved,
            TimeOffDecision::Reject => TimeOffStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub reason: Option<String>,
    pub status: TimeOffStatus,
}

/// Input for a new request. Has no `status` field: a
/// `status` key in the JSON body is ignored and the request starts pending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTimeOffRequest {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub reason: Option<String>,
}

impl NewTimeOffRequest {
    pub fn new(employee_id: i64, date: NaiveDate) -> Self {
        NewTimeOffRequest {
            employee_id,
            date,
            reason: None,
        }
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeOffFilter {
    pub status: Option<TimeOffStatus>,
}

impl TimeOffFilter {
    pub fn with_status(status: TimeOffStatus) -> Self {
        TimeOffFilter { status: Some(status) }
    }
}

/// A request joined with the employee who filed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeOffView {
    #[serde(flatten)]
    pub request: TimeOffRequest,
    pub employee: Employee,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!("pending".parse::<TimeOffStatus>().unwrap(), TimeOffStatus::Pending);
        assert_eq!("approved".parse::<TimeOffStatus>().unwrap(), TimeOffStatus::Approved);
        assert_eq!("rejected".parse::<TimeOffStatus>().unwrap(), TimeOffStatus::Rejected);
        assert!(matches!("Approved".parse::<TimeOffStatus>(), Err(ScheduleError::Validation(_))));
        assert!("".parse::<TimeOffStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TimeOffStatus::Approved).unwrap(), "\"approved\"");
        assert_eq!(TimeOffStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn decisions_target_terminal_states() {
        assert_eq!(TimeOffDecision::Approve.status(), TimeOffStatus::Approved);
        assert_eq!(TimeOffDecision::Reject.status(), TimeOffStatus::Rejected);
    }

    #[test]
    fn status_in_create_payload_is_ignored() {
        let json = r#"{"employee_id": 3, "date": "2024-06-01", "status": "approved"}"#;
        let new: NewTimeOffRequest = serde_json::from_str(json).unwrap();
        assert_eq!(new, NewTimeOffRequest::new(3, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }
}
