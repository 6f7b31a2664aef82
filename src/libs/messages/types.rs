use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeNotFound(i64),
    EmployeeDoesNotExist(i64), // referenced by a shift or time-off request
    EmployeeInactive(i64),

    // === SHIFT MESSAGES ===
    UnassignedShift,
    WeekScheduleHeader(NaiveDate, NaiveDate), // monday, sunday
    NoShiftsForWeek,
    WeekOutOfRange(NaiveDate),

    // === TIME-OFF MESSAGES ===
    TimeOffRequestNotFound(i64),
    UnknownTimeOffStatus(String),

    // === REQUEST MESSAGES ===
    InvalidRequestBody(String),
    InvalidQuery(String),
    InvalidPath(String),
    StorageFailure,
    InternalFailure,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleDatabase,
    PromptHost,
    PromptPort,
    PromptStaticDir,
    PromptDatabasePath,
    InvalidEnvValue(String, String), // variable, value

    // === SERVER MESSAGES ===
    ServerStarting(String, String), // version, address
    ServerStopped,
    DatabaseReady(String),          // path
    StaticDirMissing(String),       // path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32, u32), // applied, latest
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    NoMigrationsApplied(String), // path
}
