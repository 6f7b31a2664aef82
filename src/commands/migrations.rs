//! Schema inspection: which migrations a database file has seen.
//!
//! Read-only apart from creating the bookkeeping table; pending migrations
//! are applied by `shiftbook serve`.

use crate::db::db::Db;
use crate::db::migrations::MigrationManager;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
    #[arg(long, global = true, help = "SQLite database file (defaults to the configured one)")]
    db: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Compare the schema version with the newest migration
    Status,
    /// List applied migrations with their timestamps
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let path = match args.db {
        Some(path) => path,
        None => Config::read()?.with_env().database_path()?,
    };
    let db = Db::open(&path)?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let status = manager.status(&db.conn)?;
            msg_print!(Message::DatabaseVersion(status.current, status.latest));
            if status.is_up_to_date() {
                msg_info!(Message::DatabaseUpToDate);
            } else {
                msg_warning!(Message::DatabaseNeedsUpdate);
            }
        }
        MigrationsCommand::History => {
            let history = manager.get_migration_history(&db.conn)?;
            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied(path.display().to_string()));
            } else {
                View::migrations(&history);
            }
        }
    }

    Ok(())
}
