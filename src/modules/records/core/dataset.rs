// The whole persisted state: every project, employee and time entry.
//
// The dataset is always read and written as one unit. Collections keep insertion order.

use serde::{Deserialize, Serialize};

use crate::modules::records::core::employee::Employee;
use crate::modules::records::core::project::Project;
use crate::modules::records::core::time_entry::TimeEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}
