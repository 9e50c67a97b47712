pub mod routes;

use matric_core::{PasswordHasher, StudentStore};

/// Shared state for the auth routes: the student store plus the password
/// hasher. Both are expected to be cheaply cloneable handles.
pub struct AppState<S, H> {
    pub student_store: S,
    pub password_hasher: H,
}

impl<S, H> Clone for AppState<S, H>
where
    S: StudentStore + Clone,
    H: PasswordHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            student_store: self.student_store.clone(),
            password_hasher: self.password_hasher.clone(),
        }
    }
}
