use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.record_service.list_employees().await)
}

#[cfg(test)]
mod list_employees_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::test_support::fixtures::services::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/employees", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_list_when_no_employees_exist() {
        let response = app(make_test_state())
            .oneshot(Request::get("/employees").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }
}
