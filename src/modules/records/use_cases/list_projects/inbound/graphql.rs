use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql_types::GqlProject;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListProjectsQuery;

#[Object]
impl ListProjectsQuery {
    async fn projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let projects = state.record_service.list_projects().await;
        Ok(projects.into_iter().map(GqlProject::from).collect())
    }
}
