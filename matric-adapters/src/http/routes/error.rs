use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use matric_application::{ListStudentsError, LoginError, RegisterError};
use matric_core::StudentError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A student with this matriculation number already has an account")]
    DuplicateMatriculationNumber,

    #[error("A student with this e-mail already has an account")]
    DuplicateEmail,

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::DuplicateMatriculationNumber | AuthApiError::DuplicateEmail => {
                (StatusCode::CONFLICT, self.to_string())
            }

            AuthApiError::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<StudentError> for AuthApiError {
    fn from(error: StudentError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::InvalidInput(e) => AuthApiError::InvalidInput(e.to_string()),
            RegisterError::DuplicateMatriculationNumber => {
                AuthApiError::DuplicateMatriculationNumber
            }
            RegisterError::DuplicateEmail => AuthApiError::DuplicateEmail,
            RegisterError::HashingError(e) | RegisterError::StoreError(e) => {
                AuthApiError::UnexpectedError(e)
            }
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<ListStudentsError> for AuthApiError {
    fn from(error: ListStudentsError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}
