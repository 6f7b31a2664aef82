//! HTTP server.
//!
//! Routes:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST, GET | `/api/employees/` | [`api::employees::create`], [`api::employees::list`] |
//! | GET | `/api/employees/{id}` | [`api::employees::get_by_id`] |
//! | POST, GET | `/api/shifts/` | [`api::shifts::create`], [`api::shifts::list`] |
//! | GET | `/api/schedule/week/` | [`api::schedule::week`] |
//! | POST, GET | `/api/timeoff/` | [`api::timeoff::create`], [`api::timeoff::list`] |
//! | POST | `/api/timeoff/{id}/approve` | [`api::timeoff::approve`] |
//! | POST | `/api/timeoff/{id}/reject` | [`api::timeoff::reject`] |
//! | GET | `/` and `/static/*` | front-end files |

pub mod api;
pub mod error;
pub mod state;

use crate::db::db::Storage;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use anyhow::Result;
use axum::Router;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Builds the full application: API routes, front-end files and middleware.
pub fn build_app(state: AppState) -> Router {
    let static_dir = state.static_dir().to_path_buf();

    api::router()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Migrates the database, binds the listener and serves until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let storage = Storage::new(config.database_path()?);
    let init_storage = storage.clone();
    tokio::task::spawn_blocking(move || init_storage.init()).await??;
    info!("{}", Message::DatabaseReady(storage.path().display().to_string()));

    if !config.server.static_dir.is_dir() {
        warn!("{}", Message::StaticDirMissing(config.server.static_dir.display().to_string()));
    }

    let app = build_app(AppState::new(storage, config.server.static_dir.clone()));

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("{}", Message::ServerStarting(APP_METADATA_VERSION.to_string(), listener.local_addr()?.to_string()));

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("{}", Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
