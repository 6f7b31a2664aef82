//! # Shiftbook
//!
//! Shift scheduling for a small business: the staff roster, the weekly
//! shift plan and time-off requests, served as an HTTP+JSON API on top of a
//! single SQLite file.
//!
//! ## Features
//!
//! - **Employees**: create, look up, list alphabetically, hide inactive staff
//! - **Shifts**: assign to active employees or leave open, filter by date
//!   range and employee, view a Monday-to-Sunday week
//! - **Time off**: file requests, approve or reject them
//! - **Front end**: serves a static single-page front end at `/`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftbook::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
