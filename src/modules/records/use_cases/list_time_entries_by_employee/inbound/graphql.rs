use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::records::adapters::inbound::graphql_types::GqlTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListTimeEntriesByEmployeeQuery;

#[Object]
impl ListTimeEntriesByEmployeeQuery {
    async fn time_entries_by_employee(
        &self,
        context: &Context<'_>,
        employee_id: String,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state
            .record_service
            .list_time_entries_by_employee(&employee_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entries.into_iter().map(GqlTimeEntry::from).collect())
    }
}
