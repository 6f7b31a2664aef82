use super::error::{AppError, AppResult};
use crate::db::db::Storage;
use crate::libs::error::ScheduleResult;
use crate::libs::schedule::Schedule;
use std::path::{Path, PathBuf};

/// Router state, cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    storage: Storage,
    static_dir: PathBuf,
}

impl AppState {
    pub fn new(storage: Storage, static_dir: impl Into<PathBuf>) -> Self {
        AppState {
            storage,
            static_dir: static_dir.into(),
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Runs `op` on a blocking worker with a session of its own.
    ///
    /// The session is opened inside the worker and dropped when `op`
    /// returns, whether it succeeded or not.
    pub async fn with_schedule<T, F>(&self, op: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Schedule) -> ScheduleResult<T> + Send + 'static,
    {
        let storage = self.storage.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            let schedule = Schedule::open(&storage)?;
            op(&schedule)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(outcome?)
    }
}
