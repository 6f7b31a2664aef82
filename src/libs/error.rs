//! Domain errors for scheduling operations.
//!
//! Every operation of [`crate::libs::schedule::Schedule`] returns a
//! [`ScheduleResult`]. The variants mirror what a caller can act on: a
//! missing record, a foreign key that does not satisfy its constraint,
//! malformed input, or a storage failure. The HTTP layer maps each variant
//! to a status code; nothing here is retried or treated as fatal.

use super::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The referenced employee or time-off request does not exist (404).
    #[error("{0}")]
    NotFound(Message),

    /// An `employee_id` failed its existence or active-employee check (400).
    #[error("{0}")]
    InvalidReference(Message),

    /// Input was well-formed JSON but not acceptable (422).
    #[error("{0}")]
    Validation(Message),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl ScheduleError {
    /// Short machine-readable kind, used as the `code` of API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::NotFound(_) => "not_found",
            ScheduleError::InvalidReference(_) => "invalid_reference",
            ScheduleError::Validation(_) => "validation_error",
            ScheduleError::Storage(_) => "database_error",
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
