use super::messages::Message;
use super::shift::ShiftView;
use super::week::Week;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints one week of shifts as a table, days in order.
    pub fn week(week: &Week, shifts: &[ShiftView]) {
        msg_print!(Message::WeekScheduleHeader(week.monday, week.sunday), true);

        if shifts.is_empty() {
            msg_print!(Message::NoShiftsForWeek);
            return;
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "DAY", "DATE", "START", "END", "POSITION", "EMPLOYEE"]);
        for view in shifts {
            let shift = &view.shift;
            let employee = view
                .employee
                .as_ref()
                .map(|e| e.full_name.clone())
                .unwrap_or_else(|| Message::UnassignedShift.to_string());
            table.add_row(row![
                shift.id,
                shift.date.format("%a"),
                shift.date,
                shift.start_time.format("%H:%M"),
                shift.end_time.format("%H:%M"),
                shift.position,
                employee
            ]);
        }
        table.printstd();
    }

    /// Prints applied migrations as `(version, name, applied_at)` rows.
    pub fn migrations(history: &[(u32, String, String)]) {
        let mut table = Table::new();
        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![format!("v{}", version), name, applied_at]);
        }
        table.printstd();
    }
}
