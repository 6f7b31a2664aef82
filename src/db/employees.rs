use crate::libs::employee::{Employee, EmployeeFilter, NewEmployee};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (full_name, role, phone, hourly_rate, is_active) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EMPLOYEES: &str = "SELECT id, full_name, role, phone, hourly_rate, is_active FROM employees";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_ACTIVE: &str = "WHERE is_active = 1";
const ORDER_BY_NAME: &str = "ORDER BY full_name, id";

/// Employee queries over a borrowed storage session.
pub struct Employees<'a> {
    conn: &'a Connection,
}

impl<'a> Employees<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Employees { conn }
    }

    pub fn insert(&self, employee: &NewEmployee) -> Result<Employee> {
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![
                employee.full_name,
                employee.role,
                employee.phone,
                employee.hourly_rate,
                employee.is_active
            ],
        )?;

        Ok(Employee {
            id: self.conn.last_insert_rowid(),
            full_name: employee.full_name.clone(),
            role: employee.role.clone(),
            phone: employee.phone.clone(),
            hourly_rate: employee.hourly_rate,
            is_active: employee.is_active,
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Employee>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_EMPLOYEES, WHERE_ID), params![id], |row| Self::from_row(row, 0))
            .optional()
    }

    /// Lists employees alphabetically by full name.
    pub fn fetch(&self, filter: EmployeeFilter) -> Result<Vec<Employee>> {
        let sql = match filter {
            EmployeeFilter::All => format!("{} {}", SELECT_EMPLOYEES, ORDER_BY_NAME),
            EmployeeFilter::ActiveOnly => format!("{} {} {}", SELECT_EMPLOYEES, WHERE_ACTIVE, ORDER_BY_NAME),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let employee_iter = stmt.query_map([], |row| Self::from_row(row, 0))?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Reads an employee from `row` starting at column `offset`.
    ///
    /// Shared with the shift and time-off joins, which select the employee
    /// columns after their own.
    pub fn from_row(row: &Row, offset: usize) -> Result<Employee> {
        Ok(Employee {
            id: row.get(offset)?,
            full_name: row.get(offset + 1)?,
            role: row.get(offset + 2)?,
            phone: row.get(offset + 3)?,
            hourly_rate: row.get(offset + 4)?,
            is_active: row.get(offset + 5)?,
        })
    }
}
