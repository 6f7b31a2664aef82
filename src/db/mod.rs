//! Persistence layer for shiftbook.
//!
//! A single SQLite file holds three tables: `employees`, `shifts` and
//! `time_off_requests`, plus the `migrations` bookkeeping table. The schema
//! is created by an explicit migration step ([`db::Storage::init`]) before
//! any request is served.
//!
//! ## Sessions
//!
//! [`db::Storage`] is a cheap, cloneable handle to the database file. Every
//! unit of work calls [`db::Storage::session`] to open its own connection,
//! uses it through the query types below, and drops it when done, on success
//! and failure alike.
//!
//! ```rust,no_run
//! use shiftbook::db::{db::Storage, employees::Employees};
//! use shiftbook::libs::employee::{EmployeeFilter, NewEmployee};
//!
//! let storage = Storage::new("shifts.db");
//! storage.init()?;
//!
//! let session = storage.session()?;
//! let employees = Employees::new(&session.conn);
//! employees.insert(&NewEmployee::new("Ada Byron", "barista"))?;
//! let active = employees.fetch(EmployeeFilter::ActiveOnly)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Relationships
//!
//! Shifts and time-off requests reference employees by `employee_id` only.
//! The employee record shown next to a shift or request is joined at query
//! time; there is no object graph and no cascading delete.

/// Connection handling and the shared storage handle.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Employee inserts and lookups.
pub mod employees;

/// Shift inserts and filtered, ordered listings.
pub mod shifts;

/// Time-off requests and their status updates.
pub mod timeoff;
