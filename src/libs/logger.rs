//! Logging setup.
//!
//! `RUST_LOG` selects the filter; without it the server logs at `info`
//! including one line per HTTP request from tower-http.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Installs the global fmt subscriber. Safe to call more than once.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
