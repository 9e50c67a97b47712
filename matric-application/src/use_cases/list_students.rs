use matric_core::{StudentProfile, StudentStore, StudentStoreError};

/// Error types specific to the list-students use case
#[derive(Debug, thiserror::Error)]
pub enum ListStudentsError {
    #[error("Student store error: {0}")]
    StoreError(String),
}

impl From<StudentStoreError> for ListStudentsError {
    fn from(error: StudentStoreError) -> Self {
        ListStudentsError::StoreError(error.to_string())
    }
}

/// List-students use case - projects every stored student to its public
/// profile. Iteration order is whatever the store yields.
pub struct ListStudentsUseCase<'a, S>
where
    S: StudentStore,
{
    student_store: &'a S,
}

impl<'a, S> ListStudentsUseCase<'a, S>
where
    S: StudentStore,
{
    pub fn new(student_store: &'a S) -> Self {
        Self { student_store }
    }

    #[tracing::instrument(name = "ListStudentsUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<Vec<StudentProfile>, ListStudentsError> {
        let students = self.student_store.list_students().await?;
        Ok(students.iter().map(StudentProfile::from).collect())
    }
}
