use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::article::FieldError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    field_errors: Option<Vec<FieldErrorBody>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::ValidationFailed(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "validation failed".into(),
                field_errors: Some(errors.into_iter().map(FieldErrorBody::from).collect()),
            },
            ApplicationError::InvalidId(raw) => {
                Self::new(StatusCode::BAD_REQUEST, format!("invalid article id: {raw}"))
            }
            ApplicationError::InvalidParameter(raw) => {
                Self::new(StatusCode::BAD_REQUEST, format!("invalid parameter: {raw}"))
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Storage(msg) => {
                tracing::error!(error = %msg, "storage failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage failure".to_string(),
                )
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            field_errors: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.field_errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Canonical HTTP reason phrase, e.g. `Not Found`.
    pub error: String,
    pub message: String,
    /// Per-field problems, present only for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorBody>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorBody {
    fn from(err: FieldError) -> Self {
        Self {
            field: err.field.to_string(),
            message: err.message,
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
