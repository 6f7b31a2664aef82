//! Referential checks run before writes.
//!
//! Shifts may only be assigned to employees that exist and are active at
//! creation time. Time-off requests only need the employee to exist. Later
//! deactivation does not invalidate existing rows.

use super::employee::Employee;
use super::error::{ScheduleError, ScheduleResult};
use super::messages::Message;
use crate::db::employees::Employees;

/// Resolves the employee a new shift is assigned to.
pub fn ensure_assignable(employees: &Employees, employee_id: i64) -> ScheduleResult<Employee> {
    match employees.get(employee_id)? {
        Some(employee) if employee.is_active => Ok(employee),
        Some(_) => Err(ScheduleError::InvalidReference(Message::EmployeeInactive(employee_id))),
        None => Err(ScheduleError::InvalidReference(Message::EmployeeDoesNotExist(employee_id))),
    }
}

/// Resolves the employee filing a time-off request; inactive is allowed.
pub fn ensure_employee_exists(employees: &Employees, employee_id: i64) -> ScheduleResult<Employee> {
    employees
        .get(employee_id)?
        .ok_or(ScheduleError::InvalidReference(Message::EmployeeDoesNotExist(employee_id)))
}
