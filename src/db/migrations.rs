//! Versioned schema migrations.
//!
//! Each migration has a version, a name and an `up` function run inside the
//! migration transaction. Applied versions are recorded in the `migrations`
//! table, so running the manager again is a no-op.
//!
//! ```rust,no_run
//! use shiftbook::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("shifts.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Schema version of a database against the newest migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    pub current: u32,
    pub latest: u32,
}

impl SchemaStatus {
    pub fn is_up_to_date(&self) -> bool {
        self.current >= self.latest
    }
}

/// Registry of all migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: employees, shifts and time-off requests
        self.add_migration(1, "create_scheduling_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY,
                    full_name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    phone TEXT,
                    hourly_rate INTEGER,
                    is_active BOOLEAN NOT NULL DEFAULT 1
                )",
                [],
            )?;

            // employee_id stays NULL for unassigned shifts
            tx.execute(
                "CREATE TABLE IF NOT EXISTS shifts (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    start_time TIME NOT NULL,
                    end_time TIME NOT NULL,
                    position TEXT NOT NULL,
                    employee_id INTEGER REFERENCES employees(id)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS time_off_requests (
                    id INTEGER PRIMARY KEY,
                    employee_id INTEGER NOT NULL REFERENCES employees(id),
                    date DATE NOT NULL,
                    reason TEXT,
                    status TEXT NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'approved', 'rejected'))
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_employees_full_name ON employees(full_name)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(date, start_time)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_shifts_employee_id ON shifts(employee_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_off_requests_date ON time_off_requests(date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_off_requests_status ON time_off_requests(status)", [])?;

            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version.
    ///
    /// All pending migrations share one transaction: either the schema ends
    /// up at the latest version or nothing changes.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        tracing::info!("{}", Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            tracing::info!("{}", Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    tracing::debug!("{}", Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        tracing::info!("{}", Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 when the `migrations` table does not
    /// exist yet. Any other query failure is returned.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let has_table: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// Applied and latest known schema versions.
    pub fn status(&self, conn: &Connection) -> Result<SchemaStatus> {
        Ok(SchemaStatus {
            current: self.get_current_version(conn)?,
            latest: self.latest_version(),
        })
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    Ok(!MigrationManager::new().status(conn)?.is_up_to_date())
}
