use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::records::application::errors::RecordError;
use crate::modules::records::application::record_service::RecordService;
use crate::modules::records::core::project::Project;
use crate::modules::records::use_cases::create_project::command::CreateProject;
use crate::modules::records::use_cases::create_project::decide::decide_create_project;

impl RecordService {
    pub async fn create_project(&self, command: CreateProject) -> Result<Project, RecordError> {
        let project_id = Uuid::now_v7().to_string();
        let result = self
            .write(move |dataset| {
                let project = decide_create_project(dataset, project_id, command)?;
                dataset.projects.push(project.clone());
                Ok(project)
            })
            .await;

        match &result {
            Ok(project) => {
                info!(project_id = %project.id, client = %project.client, "project created")
            }
            Err(error) => warn!(%error, "project rejected"),
        }
        result
    }
}
