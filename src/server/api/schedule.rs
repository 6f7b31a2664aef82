//! Weekly schedule API

use super::collection;
use crate::libs::shift::ShiftView;
use crate::server::error::AppResult;
use crate::server::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    collection(Router::new(), "/api/schedule/week", get(week))
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub any_date_in_week: NaiveDate,
}

/// Shifts of the Monday..=Sunday week containing `any_date_in_week`
pub async fn week(State(state): State<AppState>, query: Result<Query<WeekQuery>, QueryRejection>) -> AppResult<Json<Vec<ShiftView>>> {
    let Query(query) = query?;
    let shifts = state
        .with_schedule(move |schedule| schedule.week_schedule(query.any_date_in_week))
        .await?;
    Ok(Json(shifts))
}
