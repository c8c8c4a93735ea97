use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql_types::GqlProject;
use crate::modules::records::use_cases::create_project::command::CreateProject;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateProjectMutation;

#[Object]
impl CreateProjectMutation {
    async fn create_project(
        &self,
        context: &Context<'_>,
        name: String,
        client: String,
    ) -> GqlResult<GqlProject> {
        let state = context.data_unchecked::<AppState>();
        let project = state
            .record_service
            .create_project(CreateProject { name, client })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(project.into())
    }
}
