use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::records::use_cases::create_employee::inbound::graphql::CreateEmployeeMutation;
use crate::modules::records::use_cases::create_project::inbound::graphql::CreateProjectMutation;
use crate::modules::records::use_cases::list_employees::inbound::graphql::ListEmployeesQuery;
use crate::modules::records::use_cases::list_projects::inbound::graphql::ListProjectsQuery;
use crate::modules::records::use_cases::list_time_entries_by_employee::inbound::graphql::ListTimeEntriesByEmployeeQuery;
use crate::modules::records::use_cases::register_time_entry::inbound::graphql::RegisterTimeEntryMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    ListProjectsQuery,
    ListEmployeesQuery,
    ListTimeEntriesByEmployeeQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateProjectMutation,
    CreateEmployeeMutation,
    RegisterTimeEntryMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::test_support::fixtures::services::make_test_state;
    use serde_json::json;

    #[tokio::test]
    async fn it_should_create_and_list_projects() {
        let schema = schema(make_test_state());

        let mutation = r#"mutation {
            createProject(name: "Website", client: "Acme") { id name client }
        }"#;
        let created = schema.execute(mutation).await;
        assert!(created.errors.is_empty(), "{:?}", created.errors);

        let listed = schema.execute("{ projects { name client } }").await;
        let data = listed.data.into_json().unwrap();
        assert_eq!(data, json!({ "projects": [{ "name": "Website", "client": "Acme" }] }));
    }

    #[tokio::test]
    async fn it_should_surface_the_duplicate_error() {
        let schema = schema(make_test_state());
        let mutation = r#"mutation { createProject(name: "Website", client: "Acme") { id } }"#;
        schema.execute(mutation).await;

        let second = schema.execute(mutation).await;

        assert_eq!(second.errors.len(), 1);
        assert!(second.errors[0].message.contains("already exists"));
    }

    #[tokio::test]
    async fn it_should_register_and_query_time_entries_by_employee() {
        let schema = schema(make_test_state());

        let missing = schema
            .execute(r#"{ timeEntriesByEmployee(employeeId: "emp-1") { id } }"#)
            .await;
        assert!(missing.errors[0].message.contains("no time entries found"));

        let registered = schema
            .execute(
                r#"mutation {
                    registerTimeEntry(
                        employeeId: "emp-1", projectId: "prj-1", task: "Review", minutes: 30
                    ) { id minutes }
                }"#,
            )
            .await;
        assert!(registered.errors.is_empty(), "{:?}", registered.errors);

        let query = r#"{
            timeEntriesByEmployee(employeeId: "emp-1") { employeeId task minutes }
        }"#;
        let listed = schema.execute(query).await;
        let data = listed.data.into_json().unwrap();
        assert_eq!(
            data,
            json!({
                "timeEntriesByEmployee": [
                    { "employeeId": "emp-1", "task": "Review", "minutes": 30 }
                ]
            })
        );
    }
}
