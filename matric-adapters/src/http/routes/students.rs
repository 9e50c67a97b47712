use axum::{Json, extract::State, response::IntoResponse};
use matric_application::ListStudentsUseCase;
use matric_core::{PasswordHasher, StudentStore};

use crate::http::AppState;

use super::error::AuthApiError;

#[tracing::instrument(name = "List students", skip_all)]
pub async fn students<S, H>(
    State(state): State<AppState<S, H>>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: StudentStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = ListStudentsUseCase::new(&state.student_store);
    let profiles = use_case.execute().await?;

    Ok(Json(profiles))
}
