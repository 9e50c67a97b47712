use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use matric_application::{RegisterUseCase, Registration};
use matric_core::{PasswordHasher, StudentProfile, StudentStore};
use secrecy::Secret;
use serde::Deserialize;

use crate::http::AppState;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "matriculationNumber")]
    pub matriculation_number: String,
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register student", skip_all)]
pub async fn register<S, H>(
    State(state): State<AppState<S, H>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: StudentStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = RegisterUseCase::new(&state.student_store, &state.password_hasher);

    let student = use_case
        .execute(Registration {
            matriculation_number: request.matriculation_number,
            name: request.name,
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(StudentProfile::from(student))))
}
