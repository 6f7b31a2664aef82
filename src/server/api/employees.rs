//! Employee API

use super::collection;
use crate::libs::employee::{Employee, NewEmployee};
use crate::server::error::AppResult;
use crate::server::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::{de, Deserialize, Deserializer};

pub fn router() -> Router<AppState> {
    collection(Router::new(), "/api/employees", get(list).post(create)).route("/api/employees/{id}", get(get_by_id))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_only_active", deserialize_with = "deserialize_flag")]
    pub only_active: bool,
}

fn default_only_active() -> bool {
    true
}

/// Query-string boolean: `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`,
/// `y/n`, case-insensitive.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = String::deserialize(deserializer)?;
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(de::Unexpected::Str(&value), &"a boolean")),
    }
}

/// Create an employee
pub async fn create(State(state): State<AppState>, payload: Result<Json<NewEmployee>, JsonRejection>) -> AppResult<Json<Employee>> {
    let Json(payload) = payload?;
    let employee = state.with_schedule(move |schedule| schedule.create_employee(payload)).await?;
    Ok(Json(employee))
}

/// List employees by name, active only unless `only_active=false`
pub async fn list(State(state): State<AppState>, query: Result<Query<ListQuery>, QueryRejection>) -> AppResult<Json<Vec<Employee>>> {
    let Query(query) = query?;
    let employees = state
        .with_schedule(move |schedule| schedule.list_employees(query.only_active))
        .await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(State(state): State<AppState>, id: Result<Path<i64>, PathRejection>) -> AppResult<Json<Employee>> {
    let Path(id) = id?;
    let employee = state.with_schedule(move |schedule| schedule.get_employee(id)).await?;
    Ok(Json(employee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn only_active(value: &str) -> Result<bool, serde_json::Error> {
        serde_json::from_value::<ListQuery>(json!({ "only_active": value })).map(|q| q.only_active)
    }

    #[test]
    fn only_active_defaults_to_true() {
        assert!(serde_json::from_value::<ListQuery>(json!({})).unwrap().only_active);
    }

    #[test]
    fn only_active_accepts_common_spellings() {
        for value in ["true", "1", "yes", "on", "TRUE", "Y"] {
            assert!(only_active(value).unwrap(), "{}", value);
        }
        for value in ["false", "0", "no", "off", "False", "n"] {
            assert!(!only_active(value).unwrap(), "{}", value);
        }
        assert!(only_active("maybe").is_err());
    }
}
