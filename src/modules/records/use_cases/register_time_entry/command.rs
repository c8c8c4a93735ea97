// Command data type for registering a time entry.
//
// Purpose
// - Express the intent to log minutes of work on a task for one employee and project.
//
// There is no date here: the entry is always stamped with the service's current time.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTimeEntry {
    pub employee_id: String,
    pub project_id: String,
    pub task: String,
    pub minutes: u32,
}
