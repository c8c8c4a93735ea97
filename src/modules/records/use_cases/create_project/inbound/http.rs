use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::records::adapters::inbound::http_errors::rejection_response;
use crate::modules::records::use_cases::create_project::command::CreateProject;
use crate::shell::state::AppState;

// Missing fields arrive as empty strings so the decider reports them like any other empty value.
#[derive(Deserialize)]
pub struct CreateProjectBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    let command = CreateProject {
        name: body.name,
        client: body.client,
    };

    match state.record_service.create_project(command).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(error) => error.into_response(),
    }
}
