use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.record_service.list_projects().await)
}
