// Reasons a decider turns a command down.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("project `{name}` already exists for client `{client}`")]
    DuplicateProject { client: String, name: String },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("daily quota exceeded: {logged} minutes already logged today, {requested} more requested")]
pub struct QuotaExceeded {
    pub logged: u32,
    pub requested: u32,
}
