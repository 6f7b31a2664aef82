//! Time-off API

use super::collection;
use crate::libs::timeoff::{NewTimeOffRequest, TimeOffFilter, TimeOffStatus, TimeOffView};
use crate::server::error::AppResult;
use crate::server::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    collection(Router::new(), "/api/timeoff", get(list).post(create))
        .route("/api/timeoff/{id}/approve", post(approve))
        .route("/api/timeoff/{id}/reject", post(reject))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// File a time-off request; it always starts pending
pub async fn create(State(state): State<AppState>, payload: Result<Json<NewTimeOffRequest>, JsonRejection>) -> AppResult<Json<TimeOffView>> {
    let Json(payload) = payload?;
    let request = state.with_schedule(move |schedule| schedule.create_time_off(payload)).await?;
    Ok(Json(request))
}

/// List requests by date, optionally only those with exactly `status`
///
/// A status no request can have matches nothing.
pub async fn list(State(state): State<AppState>, query: Result<Query<ListQuery>, QueryRejection>) -> AppResult<Json<Vec<TimeOffView>>> {
    let Query(query) = query?;
    let filter = match query.status.as_deref() {
        None | Some("") => TimeOffFilter::default(),
        Some(status) => match status.parse::<TimeOffStatus>() {
            Ok(status) => TimeOffFilter::with_status(status),
            Err(_) => return Ok(Json(Vec::new())),
        },
    };
    let requests = state.with_schedule(move |schedule| schedule.list_time_off(filter)).await?;
    Ok(Json(requests))
}

/// Approve a request, whatever its current status
pub async fn approve(State(state): State<AppState>, id: Result<Path<i64>, PathRejection>) -> AppResult<Json<TimeOffView>> {
    let Path(id) = id?;
    let request = state.with_schedule(move |schedule| schedule.approve_time_off(id)).await?;
    Ok(Json(request))
}

/// Reject a request, whatever its current status
pub async fn reject(State(state): State<AppState>, id: Result<Path<i64>, PathRejection>) -> AppResult<Json<TimeOffView>> {
    let Path(id) = id?;
    let request = state.with_schedule(move |schedule| schedule.reject_time_off(id)).await?;
    Ok(Json(request))
}
