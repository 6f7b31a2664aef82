//! Shift API

use super::collection;
use crate::libs::shift::{NewShift, ShiftFilter, ShiftView};
use crate::server::error::AppResult;
use crate::server::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    collection(Router::new(), "/api/shifts", get(list).post(create))
}

/// Create a shift, optionally assigned to an active employee
pub async fn create(State(state): State<AppState>, payload: Result<Json<NewShift>, JsonRejection>) -> AppResult<Json<ShiftView>> {
    let Json(payload) = payload?;
    let shift = state.with_schedule(move |schedule| schedule.create_shift(payload)).await?;
    Ok(Json(shift))
}

/// List shifts, filtered by `start_date`, `end_date` (inclusive) and `employee_id`
pub async fn list(State(state): State<AppState>, filter: Result<Query<ShiftFilter>, QueryRejection>) -> AppResult<Json<Vec<ShiftView>>> {
    let Query(filter) = filter?;
    let shifts = state.with_schedule(move |schedule| schedule.list_shifts(&filter)).await?;
    Ok(Json(shifts))
}
