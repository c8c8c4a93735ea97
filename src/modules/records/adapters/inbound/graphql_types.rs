use async_graphql::SimpleObject;

use crate::modules::records::core::employee::Employee;
use crate::modules::records::core::project::Project;
use crate::modules::records::core::time_entry::TimeEntry;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Project")]
pub struct GqlProject {
    pub id: String,
    pub name: String,
    pub client: String,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            client: p.client,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Employee")]
pub struct GqlEmployee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Employee> for GqlEmployee {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "TimeEntry")]
pub struct GqlTimeEntry {
    pub id: String,
    pub employee_id: String,
    pub project_id: String,
    pub task: String,
    pub minutes: u32,
    /// RFC 3339 with the offset the entry was recorded in.
    pub date: String,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(t: TimeEntry) -> Self {
        Self {
            id: t.id,
            employee_id: t.employee_id,
            project_id: t.project_id,
            task: t.task,
            minutes: t.minutes,
            date: t.date.to_rfc3339(),
        }
    }
}
