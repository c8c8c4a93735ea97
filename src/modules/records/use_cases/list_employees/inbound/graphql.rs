use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql_types::GqlEmployee;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListEmployeesQuery;

#[Object]
impl ListEmployeesQuery {
    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        let employees = state.record_service.list_employees().await;
        Ok(employees.into_iter().map(GqlEmployee::from).collect())
    }
}
