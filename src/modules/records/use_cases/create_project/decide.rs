// Pure decision function for project creation.
//
// Responsibilities
// - Reject an empty name or client.
// - Reject a `(client, name)` pair that already exists.
// - Otherwise build the new project with the id it was given. Never performs input or output.

use crate::modules::records::core::dataset::Dataset;
use crate::modules::records::core::decision::ValidationError;
use crate::modules::records::core::project::Project;
use crate::modules::records::core::rules::is_duplicate_project;
use crate::modules::records::use_cases::create_project::command::CreateProject;

pub fn decide_create_project(
    dataset: &Dataset,
    project_id: String,
    command: CreateProject,
) -> Result<Project, ValidationError> {
    if command.name.is_empty() {
        return Err(ValidationError::EmptyField("name"));
    }
    if command.client.is_empty() {
        return Err(ValidationError::EmptyField("client"));
    }
    if is_duplicate_project(dataset, &command.client, &command.name) {
        return Err(ValidationError::DuplicateProject {
            client: command.client,
            name: command.name,
        });
    }
    Ok(Project {
        id: project_id,
        name: command.name,
        client: command.client,
    })
}
