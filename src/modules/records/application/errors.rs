use thiserror::Error;

use crate::modules::records::adapters::outbound::dataset_store::StoreError;
use crate::modules::records::core::decision::{QuotaExceeded, ValidationError};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    QuotaExceeded(#[from] QuotaExceeded),

    #[error("no time entries found for employee `{employee_id}`")]
    NotFound { employee_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
