use super::migrations::init_with_migrations;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DB_FILE_NAME: &str = "shifts.db";

/// How long a session waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// A single storage session: one SQLite connection, closed on drop.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens a session on an already migrated database file.
    pub fn open(path: &Path) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "foreign_keys", true)?;

        Ok(Db { conn })
    }

    /// Opens the database and applies pending migrations.
    pub fn open_migrated(path: &Path) -> Result<Db> {
        let mut db = Db::open(path)?;
        init_with_migrations(&mut db.conn)?;
        Ok(db)
    }
}

/// Handle to the database file, shared by every request.
///
/// The handle itself holds no connection; [`Storage::session`] opens one per
/// unit of work so each request owns and releases its own session.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and brings the schema up to date.
    ///
    /// Must run once before the first [`Storage::session`].
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Db::open_migrated(&self.path)?;
        Ok(())
    }

    pub fn session(&self) -> rusqlite::Result<Db> {
        Db::open(&self.path)
    }
}
