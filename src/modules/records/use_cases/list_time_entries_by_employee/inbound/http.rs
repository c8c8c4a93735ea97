use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    match state
        .record_service
        .list_time_entries_by_employee(&employee_id)
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error.into_response(),
    }
}
