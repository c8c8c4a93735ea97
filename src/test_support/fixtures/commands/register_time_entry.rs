// Shared test fixture for the RegisterTimeEntry command.

use crate::modules::records::use_cases::register_time_entry::command::RegisterTimeEntry;

pub struct RegisterTimeEntryBuilder {
    inner: RegisterTimeEntry,
}

impl Default for RegisterTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterTimeEntry {
                employee_id: "emp-fixed-0001".to_string(),
                project_id: "prj-fixed-0001".to_string(),
                task: "Code review".to_string(),
                minutes: 60,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn task(mut self, v: impl Into<String>) -> Self {
        self.inner.task = v.into();
        self
    }

    pub fn minutes(mut self, v: u32) -> Self {
        self.inner.minutes = v;
        self
    }

    pub fn build(self) -> RegisterTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod register_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterTimeEntryBuilder::default()
            .employee_id("emp-9")
            .project_id("prj-9")
            .task("Planning")
            .minutes(15)
            .build();

        assert_eq!(
            custom,
            RegisterTimeEntry {
                employee_id: "emp-9".into(),
                project_id: "prj-9".into(),
                task: "Planning".into(),
                minutes: 15,
            }
        );
    }
}
