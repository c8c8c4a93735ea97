use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::records::adapters::inbound::http_errors::rejection_response;
use crate::modules::records::use_cases::create_employee::command::CreateEmployee;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    let command = CreateEmployee {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
    };

    match state.record_service.create_employee(command).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(error) => error.into_response(),
    }
}
