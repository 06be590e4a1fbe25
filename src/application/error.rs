// src/application/error.rs
use crate::domain::{article::FieldError, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("invalid article id: {0}")]
    InvalidId(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApplicationError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::ValidationFailed(errors)
    }

    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId(raw.into())
    }

    pub fn invalid_parameter(raw: impl Into<String>) -> Self {
        Self::InvalidParameter(raw.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidParameter(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Storage(msg),
        }
    }
}
