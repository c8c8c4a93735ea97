// Pure consistency rules evaluated against a dataset snapshot.
//
// Nothing here performs input or output. Deciders combine these checks into accept or reject.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::modules::records::core::dataset::Dataset;

/// Most minutes one employee may log on a single calendar day.
pub const DAILY_QUOTA_MINUTES: u32 = 480;

/// Exact, case-sensitive match on both `client` and `name`.
pub fn is_duplicate_project(dataset: &Dataset, client: &str, name: &str) -> bool {
    dataset
        .projects
        .iter()
        .any(|project| project.client == client && project.name == name)
}

/// Minutes the employee has logged on the local calendar day of `date`.
///
/// Days are compared by year, month and day in the server's local time zone, not by a
/// rolling 24 hour window.
pub fn daily_minutes_for<Tz: TimeZone>(
    dataset: &Dataset,
    employee_id: &str,
    date: &DateTime<Tz>,
) -> u32 {
    let day = local_day(date);
    dataset
        .time_entries
        .iter()
        .filter(|entry| entry.employee_id == employee_id && local_day(&entry.date) == day)
        .fold(0u32, |total, entry| total.saturating_add(entry.minutes))
}

pub fn exceeds_daily_quota<Tz: TimeZone>(
    dataset: &Dataset,
    employee_id: &str,
    date: &DateTime<Tz>,
    additional_minutes: u32,
) -> bool {
    daily_minutes_for(dataset, employee_id, date).saturating_add(additional_minutes)
        > DAILY_QUOTA_MINUTES
}

fn local_day<Tz: TimeZone>(date: &DateTime<Tz>) -> NaiveDate {
    date.with_timezone(&Local).date_naive()
}
