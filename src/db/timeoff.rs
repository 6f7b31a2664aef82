use super::employees::Employees;
use crate::libs::timeoff::{NewTimeOffRequest, TimeOffFilter, TimeOffRequest, TimeOffStatus, TimeOffView};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Result, Row, ToSql};

const INSERT_REQUEST: &str = "INSERT INTO time_off_requests (employee_id, date, reason, status) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_STATUS: &str = "UPDATE time_off_requests SET status = ?2 WHERE id = ?1";
const SELECT_REQUESTS: &str = "
    SELECT t.id, t.employee_id, t.date, t.reason, t.status,
           e.id, e.full_name, e.role, e.phone, e.hourly_rate, e.is_active
    FROM time_off_requests t
    JOIN employees e ON e.id = t.employee_id";
const WHERE_ID: &str = "WHERE t.id = ?1";
const WHERE_STATUS: &str = "WHERE t.status = ?1";
const ORDER_BY_DATE: &str = "ORDER BY t.date, t.id";

const REQUEST_COLUMNS: usize = 5;

impl ToSql for TimeOffStatus {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TimeOffStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let status = value.as_str()?;
        status.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

pub struct TimeOffRequests<'a> {
    conn: &'a Connection,
}

impl<'a> TimeOffRequests<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        TimeOffRequests { conn }
    }

    /// Stores a new request. The status is always `pending`.
    pub fn insert(&self, request: &NewTimeOffRequest) -> Result<i64> {
        self.conn.execute(
            INSERT_REQUEST,
            params![request.employee_id, request.date, request.reason, TimeOffStatus::Pending],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrites the status of a request, whatever it was before.
    ///
    /// Returns `false` when no request has the given id.
    pub fn set_status(&self, id: i64, status: TimeOffStatus) -> Result<bool> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status])?;
        Ok(affected > 0)
    }

    pub fn get(&self, id: i64) -> Result<Option<TimeOffView>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_REQUESTS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    /// Lists requests by date, optionally restricted to one status.
    pub fn fetch(&self, filter: TimeOffFilter) -> Result<Vec<TimeOffView>> {
        let (mut stmt, status) = match filter.status {
            Some(status) => (self.conn.prepare(&format!("{} {} {}", SELECT_REQUESTS, WHERE_STATUS, ORDER_BY_DATE))?, Some(status)),
            None => (self.conn.prepare(&format!("{} {}", SELECT_REQUESTS, ORDER_BY_DATE))?, None),
        };

        let request_iter = match status {
            Some(status) => stmt.query_map(params![status], Self::from_row)?,
            None => stmt.query_map([], Self::from_row)?,
        };

        let mut requests = Vec::new();
        for request in request_iter {
            requests.push(request?);
        }
        Ok(requests)
    }

    fn from_row(row: &Row) -> Result<TimeOffView> {
        Ok(TimeOffView {
            request: TimeOffRequest {
                id: row.get(0)?,
                employee_id: row.get(1)?,
                date: row.get(2)?,
                reason: row.get(3)?,
                status: row.get(4)?,
            },
            employee: Employees::from_row(row, REQUEST_COLUMNS)?,
        })
    }
}
