// Shared test fixture for the CreateProject command.

use crate::modules::records::use_cases::create_project::command::CreateProject;

pub struct CreateProjectBuilder {
    inner: CreateProject,
}

impl Default for CreateProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateProjectBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateProject {
                name: "Website relaunch".to_string(),
                client: "Acme".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn build(self) -> CreateProject {
        self.inner
    }
}
