//! Display implementation for shiftbook messages.
//!
//! Every user-facing text (CLI output, log lines and HTTP error details)
//! is defined here, so the wording stays consistent between the terminal
//! and the API.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeNotFound(id) => format!("Employee {} not found", id),
            Message::EmployeeDoesNotExist(id) => format!("Invalid employee_id: employee {} does not exist", id),
            Message::EmployeeInactive(id) => format!("Invalid employee_id: employee {} is not active", id),

            // === SHIFT MESSAGES ===
            Message::UnassignedShift => "unassigned".to_string(),
            Message::WeekScheduleHeader(monday, sunday) => format!(
                "📅 Week {} - {}",
                monday.format("%a %Y-%m-%d"),
                sunday.format("%a %Y-%m-%d")
            ),
            Message::NoShiftsForWeek => "No shifts scheduled for this week".to_string(),
            Message::WeekOutOfRange(date) => format!("Week containing {} is outside the supported calendar range", date),

            // === TIME-OFF MESSAGES ===
            Message::TimeOffRequestNotFound(id) => format!("Time-off request {} not found", id),
            Message::UnknownTimeOffStatus(status) => {
                format!("Unknown time-off status '{}', expected one of: pending, approved, rejected", status)
            }

            // === REQUEST MESSAGES ===
            Message::InvalidRequestBody(reason) => format!("Invalid request body: {}", reason),
            Message::InvalidQuery(reason) => format!("Invalid query parameters: {}", reason),
            Message::InvalidPath(reason) => format!("Invalid path parameter: {}", reason),
            Message::StorageFailure => "Database error".to_string(),
            Message::InternalFailure => "Internal server error".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::PromptHost => "Listen address".to_string(),
            Message::PromptPort => "Listen port".to_string(),
            Message::PromptStaticDir => "Front-end directory".to_string(),
            Message::PromptDatabasePath => "Database file (leave empty for the default location)".to_string(),
            Message::InvalidEnvValue(name, value) => format!("Ignoring {}={}: not a valid value", name, value),

            // === SERVER MESSAGES ===
            Message::ServerStarting(version, addr) => format!("shiftbook {} listening on http://{}", version, addr),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::DatabaseReady(path) => format!("Database ready at {}", path),
            Message::StaticDirMissing(path) => format!("Front-end directory {} does not exist, / and /static will return 404", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(current, latest) => format!("Schema version {} of {}", current, latest),
            Message::DatabaseNeedsUpdate => "Database needs migration, run `shiftbook serve` to apply it".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::NoMigrationsApplied(path) => format!("No migrations applied to {} yet", path),
        };
        write!(f, "{}", s)
    }
}
