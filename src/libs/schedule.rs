//! Scheduling operations over one storage session.
//!
//! [`Schedule`] is the single entry point used by both the HTTP handlers and
//! the CLI. It owns one [`Db`] session for its lifetime, runs the
//! referential checks from [`super::validation`] before each write and
//! returns records joined with their employee.

use super::employee::{Employee, EmployeeFilter, NewEmployee};
use super::error::{ScheduleError, ScheduleResult};
use super::messages::Message;
use super::shift::{NewShift, Shift, ShiftFilter, ShiftView};
use super::timeoff::{NewTimeOffRequest, TimeOffDecision, TimeOffFilter, TimeOffView};
use super::validation::{ensure_assignable, ensure_employee_exists};
use super::week::Week;
use crate::db::db::{Db, Storage};
use crate::db::employees::Employees;
use crate::db::shifts::Shifts;
use crate::db::timeoff::TimeOffRequests;
use chrono::NaiveDate;
use tracing::{debug, info};

pub struct Schedule {
    db: Db,
}

impl Schedule {
    pub fn new(db: Db) -> Self {
        Schedule { db }
    }

    /// Opens a fresh session on `storage`.
    pub fn open(storage: &Storage) -> ScheduleResult<Self> {
        Ok(Schedule::new(storage.session()?))
    }

    fn employees(&self) -> Employees<'_> {
        Employees::new(&self.db.conn)
    }

    fn shifts(&self) -> Shifts<'_> {
        Shifts::new(&self.db.conn)
    }

    fn time_off(&self) -> TimeOffRequests<'_> {
        TimeOffRequests::new(&self.db.conn)
    }

    // === EMPLOYEES ===

    pub fn create_employee(&self, employee: NewEmployee) -> ScheduleResult<Employee> {
        let employee = self.employees().insert(&employee)?;
        info!(employee_id = employee.id, role = %employee.role, "employee created");
        Ok(employee)
    }

    /// Employees ordered by full name; `only_active` hides deactivated staff.
    pub fn list_employees(&self, only_active: bool) -> ScheduleResult<Vec<Employee>> {
        Ok(self.employees().fetch(EmployeeFilter::from_only_active(only_active))?)
    }

    pub fn get_employee(&self, id: i64) -> ScheduleResult<Employee> {
        self.employees()
            .get(id)?
            .ok_or(ScheduleError::NotFound(Message::EmployeeNotFound(id)))
    }

    // === SHIFTS ===

    /// Stores a shift. An assigned employee must exist and be active; no
    /// overlap or time-order check is made.
    pub fn create_shift(&self, shift: NewShift) -> ScheduleResult<ShiftView> {
        let employee = match shift.employee_id {
            Some(employee_id) => Some(ensure_assignable(&self.employees(), employee_id)?),
            None => None,
        };

        let id = self.shifts().insert(&shift)?;
        info!(shift_id = id, date = %shift.date, employee_id = ?shift.employee_id, "shift created");

        Ok(ShiftView {
            shift: Shift {
                id,
                date: shift.date,
                start_time: shift.start_time,
                end_time: shift.end_time,
                position: shift.position,
                employee_id: shift.employee_id,
            },
            employee,
        })
    }

    pub fn list_shifts(&self, filter: &ShiftFilter) -> ScheduleResult<Vec<ShiftView>> {
        Ok(self.shifts().fetch(filter)?)
    }

    /// All shifts of the Monday..=Sunday week containing `any_date`.
    pub fn week_schedule(&self, any_date: NaiveDate) -> ScheduleResult<Vec<ShiftView>> {
        let week = Week::containing(any_date).ok_or(ScheduleError::Validation(Message::WeekOutOfRange(any_date)))?;
        debug!(monday = %week.monday, sunday = %week.sunday, "week schedule");
        self.list_shifts(&ShiftFilter::between(week.monday, week.sunday))
    }

    // === TIME OFF ===

    /// Files a request for an existing (possibly inactive) employee. The
    /// request always starts pending.
    pub fn create_time_off(&self, request: NewTimeOffRequest) -> ScheduleResult<TimeOffView> {
        ensure_employee_exists(&self.employees(), request.employee_id)?;

        let id = self.time_off().insert(&request)?;
        info!(request_id = id, employee_id = request.employee_id, date = %request.date, "time-off requested");

        self.time_off()
            .get(id)?
            .ok_or(ScheduleError::NotFound(Message::TimeOffRequestNotFound(id)))
    }

    pub fn list_time_off(&self, filter: TimeOffFilter) -> ScheduleResult<Vec<TimeOffView>> {
        Ok(self.time_off().fetch(filter)?)
    }

    pub fn approve_time_off(&self, id: i64) -> ScheduleResult<TimeOffView> {
        self.decide_time_off(id, TimeOffDecision::Approve)
    }

    pub fn reject_time_off(&self, id: i64) -> ScheduleResult<TimeOffView> {
        self.decide_time_off(id, TimeOffDecision::Reject)
    }

    /// Applies a decision regardless of the current status.
    fn decide_time_off(&self, id: i64, decision: TimeOffDecision) -> ScheduleResult<TimeOffView> {
        let status = decision.status();
        if !self.time_off().set_status(id, status)? {
            return Err(ScheduleError::NotFound(Message::TimeOffRequestNotFound(id)));
        }
        info!(request_id = id, %status, "time-off decided");

        self.time_off()
            .get(id)?
            .ok_or(ScheduleError::NotFound(Message::TimeOffRequestNotFound(id)))
    }
}
