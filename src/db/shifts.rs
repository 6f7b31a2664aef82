use super::employees::Employees;
use crate::libs::shift::{NewShift, Shift, ShiftFilter, ShiftView};
use rusqlite::{params, Connection, Result, Row, ToSql};

const INSERT_SHIFT: &str = "INSERT INTO shifts (date, start_time, end_time, position, employee_id) VALUES (?1, ?2, ?3, ?4, ?5)";
// Unassigned shifts keep their row through the LEFT JOIN with NULL employee columns.
const SELECT_SHIFTS: &str = "
    SELECT s.id, s.date, s.start_time, s.end_time, s.position, s.employee_id,
           e.id, e.full_name, e.role, e.phone, e.hourly_rate, e.is_active
    FROM shifts s
    LEFT JOIN employees e ON e.id = s.employee_id";
const ORDER_BY_SCHEDULE: &str = "ORDER BY s.date, s.start_time, s.id";

const SHIFT_COLUMNS: usize = 6;

pub struct Shifts<'a> {
    conn: &'a Connection,
}

impl<'a> Shifts<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Shifts { conn }
    }

    pub fn insert(&self, shift: &NewShift) -> Result<i64> {
        self.conn.execute(
            INSERT_SHIFT,
            params![shift.date, shift.start_time, shift.end_time, shift.position, shift.employee_id],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Lists shifts matching every set filter, ordered by date then start time.
    pub fn fetch(&self, filter: &ShiftFilter) -> Result<Vec<ShiftView>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(start_date) = &filter.start_date {
            clauses.push("s.date >= ?");
            values.push(start_date);
        }
        if let Some(end_date) = &filter.end_date {
            clauses.push("s.date <= ?");
            values.push(end_date);
        }
        if let Some(employee_id) = &filter.employee_id {
            clauses.push("s.employee_id = ?");
            values.push(employee_id);
        }

        let sql = if clauses.is_empty() {
            format!("{} {}", SELECT_SHIFTS, ORDER_BY_SCHEDULE)
        } else {
            format!("{} WHERE {} {}", SELECT_SHIFTS, clauses.join(" AND "), ORDER_BY_SCHEDULE)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let shift_iter = stmt.query_map(values.as_slice(), Self::from_row)?;

        let mut shifts = Vec::new();
        for shift in shift_iter {
            shifts.push(shift?);
        }
        Ok(shifts)
    }

    fn from_row(row: &Row) -> Result<ShiftView> {
        let shift = Shift {
            id: row.get(0)?,
            date: row.get(1)?,
            start_time: row.get(2)?,
            end_time: row.get(3)?,
            position: row.get(4)?,
            employee_id: row.get(5)?,
        };
        let employee = match row.get::<_, Option<i64>>(SHIFT_COLUMNS)? {
            Some(_) => Some(Employees::from_row(row, SHIFT_COLUMNS)?),
            None => None,
        };

        Ok(ShiftView { shift, employee })
    }
}
