//! Core library modules for shiftbook.
//!
//! - **Domain types**: [`employee`], [`shift`], [`timeoff`]
//! - **Scheduling logic**: [`week`] boundaries, [`validation`] of employee
//!   references and the [`schedule`] service tying them to storage
//! - **Infrastructure**: [`config`], [`data_storage`], [`logger`],
//!   [`messages`], [`error`]
//! - **Terminal output**: [`view`]
//!
//! ```rust,no_run
//! use shiftbook::db::db::Storage;
//! use shiftbook::libs::employee::NewEmployee;
//! use shiftbook::libs::schedule::Schedule;
//!
//! let storage = Storage::new("shifts.db");
//! storage.init()?;
//! let schedule = Schedule::open(&storage)?;
//! let employee = schedule.create_employee(NewEmployee::new("Grace Hopper", "shift lead"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod logger;
pub mod messages;
pub mod schedule;
pub mod shift;
pub mod timeoff;
pub mod validation;
pub mod view;
pub mod week;
