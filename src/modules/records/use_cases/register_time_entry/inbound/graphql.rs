use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql_types::GqlTimeEntry;
use crate::modules::records::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterTimeEntryMutation;

#[Object]
impl RegisterTimeEntryMutation {
    async fn register_time_entry(
        &self,
        context: &Context<'_>,
        employee_id: String,
        project_id: String,
        task: String,
        minutes: u32,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterTimeEntry {
            employee_id,
            project_id,
            task,
            minutes,
        };
        let entry = state
            .record_service
            .register_time_entry(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }
}
