use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::records::adapters::inbound::http_errors::rejection_response;
use crate::modules::records::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shell::state::AppState;

// Unknown fields, `date` included, are ignored: the service stamps the entry itself.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTimeEntryBody {
    pub employee_id: String,
    pub project_id: String,
    pub task: String,
    pub minutes: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    let command = RegisterTimeEntry {
        employee_id: body.employee_id,
        project_id: body.project_id,
        task: body.task,
        minutes: body.minutes,
    };

    match state.record_service.register_time_entry(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod register_time_entry_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::test_support::fixtures::services::{fixed_now, make_read_only_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/timeEntries", post(handle))
            .with_state(state)
    }

    fn post_time_entries(body: &'static str) -> Request<Body> {
        Request::post("/timeEntries")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_a_server_stamped_entry() {
        let body = r#"{
            "employeeId": "emp-1",
            "projectId": "prj-1",
            "task": "Review",
            "minutes": 90,
            "date": "2001-01-01T00:00:00Z"
        }"#;

        let response = app(make_test_state())
            .oneshot(post_time_entries(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["id"].as_str().is_some());
        assert_eq!(json["employeeId"], "emp-1");
        assert_eq!(json["minutes"], 90);
        assert_eq!(json["date"], fixed_now().fixed_offset().to_rfc3339());
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_daily_quota_would_be_exceeded() {
        let state = make_test_state();
        let full = r#"{"employeeId":"emp-1","projectId":"prj-1","task":"Review","minutes":480}"#;
        let one_more = r#"{"employeeId":"emp-1","projectId":"prj-1","task":"Review","minutes":1}"#;
        let first = app(state.clone())
            .oneshot(post_time_entries(full))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app(state)
            .oneshot(post_time_entries(one_more))
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_422_on_non_numeric_or_negative_minutes() {
        let state = make_test_state();
        for body in [
            r#"{"employeeId":"emp-1","projectId":"prj-1","task":"Review","minutes":"ninety"}"#,
            r#"{"employeeId":"emp-1","projectId":"prj-1","task":"Review","minutes":-5}"#,
            r#"{"employeeId":"emp-1","projectId":"prj-1","task":"Review"}"#,
        ] {
            let response = app(state.clone())
                .oneshot(post_time_entries(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_read_only() {
        let body = r#"{"employeeId":"emp-1","projectId":"prj-1","task":"Review","minutes":90}"#;

        let response = app(make_read_only_state())
            .oneshot(post_time_entries(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
