// Pure decision function for registration.
//
// Responsibilities
// - Enforce the daily quota for the employee on the calendar day of `now`.
// - Build the entry stamped with `now`. Employee and project ids are stored as given.
// - Never perform input or output.

use chrono::{DateTime, Local};

use crate::modules::records::core::dataset::Dataset;
use crate::modules::records::core::decision::QuotaExceeded;
use crate::modules::records::core::rules::{daily_minutes_for, exceeds_daily_quota};
use crate::modules::records::core::time_entry::TimeEntry;
use crate::modules::records::use_cases::register_time_entry::command::RegisterTimeEntry;

pub fn decide_register_time_entry(
    dataset: &Dataset,
    time_entry_id: String,
    now: DateTime<Local>,
    command: RegisterTimeEntry,
) -> Result<TimeEntry, QuotaExceeded> {
    if exceeds_daily_quota(dataset, &command.employee_id, &now, command.minutes) {
        return Err(QuotaExceeded {
            logged: daily_minutes_for(dataset, &command.employee_id, &now),
            requested: command.minutes,
        });
    }
    Ok(TimeEntry {
        id: time_entry_id,
        employee_id: command.employee_id,
        project_id: command.project_id,
        task: command.task,
        minutes: command.minutes,
        date: now.fixed_offset(),
    })
}
