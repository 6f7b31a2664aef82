//! JSON API routes under `/api`.

pub mod employees;
pub mod schedule;
pub mod shifts;
pub mod timeoff;

use super::state::AppState;
use axum::routing::MethodRouter;
use axum::Router;

/// All API routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(employees::router())
        .merge(shifts::router())
        .merge(schedule::router())
        .merge(timeoff::router())
}

/// Registers `method_router` at `path` and at `path/`.
///
/// Collection endpoints are published with a trailing slash; both spellings
/// are accepted.
pub(crate) fn collection(router: Router<AppState>, path: &str, method_router: MethodRouter<AppState>) -> Router<AppState> {
    router.route(path, method_router.clone()).route(&format!("{}/", path), method_router)
}
