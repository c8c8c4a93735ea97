use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql_types::GqlEmployee;
use crate::modules::records::use_cases::create_employee::command::CreateEmployee;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEmployeeMutation;

#[Object]
impl CreateEmployeeMutation {
    async fn create_employee(
        &self,
        context: &Context<'_>,
        first_name: String,
        last_name: String,
        email: String,
    ) -> GqlResult<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateEmployee {
            first_name,
            last_name,
            email,
        };
        let employee = state
            .record_service
            .create_employee(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(employee.into())
    }
}
