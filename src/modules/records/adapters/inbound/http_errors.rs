// Maps record service failures onto HTTP responses.
//
// Every error body has the shape `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::modules::records::application::errors::RecordError;
use crate::modules::records::core::decision::ValidationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn rejection_response(rejection: JsonRejection) -> Response {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecordError::Validation(ValidationError::EmptyField(_)) => StatusCode::BAD_REQUEST,
            RecordError::Validation(ValidationError::DuplicateProject { .. }) => {
                StatusCode::CONFLICT
            }
            RecordError::QuotaExceeded(_) => StatusCode::CONFLICT,
            RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
            RecordError::Store(store_error) => {
                error!(error = %store_error, "dataset store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}

#[cfg(test)]
mod http_errors_tests {
    use super::*;
    use crate::modules::records::adapters::outbound::dataset_store::StoreError;
    use crate::modules::records::core::decision::QuotaExceeded;
    use rstest::rstest;

    #[rstest]
    #[case(RecordError::Validation(ValidationError::EmptyField("name")), StatusCode::BAD_REQUEST)]
    #[case(
        RecordError::Validation(ValidationError::DuplicateProject {
            client: "Acme".into(),
            name: "Web".into(),
        }),
        StatusCode::CONFLICT
    )]
    #[case(
        RecordError::QuotaExceeded(QuotaExceeded { logged: 480, requested: 1 }),
        StatusCode::CONFLICT
    )]
    #[case(RecordError::NotFound { employee_id: "emp-1".into() }, StatusCode::NOT_FOUND)]
    #[case(RecordError::Store(StoreError::ReadOnly), StatusCode::INTERNAL_SERVER_ERROR)]
    fn it_should_map_each_error_to_its_status(
        #[case] error: RecordError,
        #[case] status: StatusCode,
    ) {
        assert_eq!(error.into_response().status(), status);
    }
}
