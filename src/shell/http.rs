use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::records::use_cases::create_employee::inbound::http as create_employee_http;
use crate::modules::records::use_cases::create_project::inbound::http as create_project_http;
use crate::modules::records::use_cases::list_employees::inbound::http as list_employees_http;
use crate::modules::records::use_cases::list_projects::inbound::http as list_projects_http;
use crate::modules::records::use_cases::list_time_entries_by_employee::inbound::http as list_time_entries_http;
use crate::modules::records::use_cases::register_time_entry::inbound::http as register_time_entry_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .route(
            "/projects",
            get(list_projects_http::handle).post(create_project_http::handle),
        )
        .route(
            "/employees",
            get(list_employees_http::handle).post(create_employee_http::handle),
        )
        .route("/timeEntries", post(register_time_entry_http::handle))
        .route(
            "/timeEntries/{employee_id}",
            get(list_time_entries_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_support::fixtures::services::make_test_state;

    use super::router;

    #[tokio::test]
    async fn it_should_serve_the_full_record_flow() {
        let app = router(make_test_state());

        let created = app
            .clone()
            .oneshot(
                Request::post("/employees")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let bytes = created.into_body().collect().await.unwrap().to_bytes();
        let employee: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let employee_id = employee["id"].as_str().unwrap().to_string();

        let body = format!(
            r#"{{"employeeId":"{employee_id}","projectId":"prj-1","task":"Review","minutes":30}}"#
        );
        let registered = app
            .clone()
            .oneshot(
                Request::post("/timeEntries")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(registered.status(), StatusCode::CREATED);

        let listed = app
            .oneshot(
                Request::get(format!("/timeEntries/{employee_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(listed.status(), StatusCode::OK);
        let bytes = listed.into_body().collect().await.unwrap().to_bytes();
        let entries: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(entries.as_array().unwrap().len(), 1);
        assert_eq!(entries[0]["task"], "Review");
    }

    #[tokio::test]
    async fn it_should_serve_graphiql() {
        let response = router(make_test_state())
            .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
