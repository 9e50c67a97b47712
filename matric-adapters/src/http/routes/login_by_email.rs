use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use matric_application::LoginUseCase;
use matric_core::{PasswordHasher, StudentStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::http::AppState;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct LoginByEmailRequest {
    pub email: String,
    pub password: Secret<String>,
}

/// A failed login is always the same 401, whether the address is unknown or
/// the password is wrong.
#[tracing::instrument(name = "Login by email", skip_all)]
pub async fn login_by_email<S, H>(
    State(state): State<AppState<S, H>>,
    Json(request): Json<LoginByEmailRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: StudentStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = LoginUseCase::new(&state.student_store, &state.password_hasher);

    let logged_in = use_case.by_email(&request.email, &request.password).await?;
    if !logged_in {
        return Err(AuthApiError::InvalidCredentials(
            "Invalid email or password".to_string(),
        ));
    }

    Ok((StatusCode::OK, String::from("Login successful")))
}
