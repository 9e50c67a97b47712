use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use matric_application::LoginUseCase;
use matric_core::{PasswordHasher, StudentStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::http::AppState;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct LoginByMatriculationRequest {
    #[serde(rename = "matriculationNumber")]
    pub matriculation_number: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login by matriculation number", skip_all)]
pub async fn login_by_matriculation<S, H>(
    State(state): State<AppState<S, H>>,
    Json(request): Json<LoginByMatriculationRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: StudentStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = LoginUseCase::new(&state.student_store, &state.password_hasher);

    let logged_in = use_case
        .by_matriculation_number(&request.matriculation_number, &request.password)
        .await?;
    if !logged_in {
        return Err(AuthApiError::InvalidCredentials(
            "Invalid matriculation number or password".to_string(),
        ));
    }

    Ok((StatusCode::OK, String::from("Login successful")))
}
