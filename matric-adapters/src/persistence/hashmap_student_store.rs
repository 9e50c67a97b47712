use std::collections::HashMap;
use std::sync::Arc;

use matric_core::{Email, MatriculationNumber, Student, StudentStore, StudentStoreError};
use tokio::sync::RwLock;

/// In-memory student store keyed by matriculation number, used in tests and
/// for running the service without a database. Clones share the same map.
#[derive(Clone, Default)]
pub struct HashMapStudentStore {
    students: Arc<RwLock<HashMap<String, Student>>>,
}

impl HashMapStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StudentStore for HashMapStudentStore {
    async fn insert_student(&self, student: Student) -> Result<Student, StudentStoreError> {
        let mut students = self.students.write().await;
        if students.contains_key(student.matriculation_number().as_str()) {
            return Err(StudentStoreError::DuplicateMatriculationNumber);
        }
        if students
            .values()
            .any(|existing| existing.email() == student.email())
        {
            return Err(StudentStoreError::DuplicateEmail);
        }
        students.insert(
            student.matriculation_number().as_str().to_string(),
            student.clone(),
        );
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentStoreError> {
        let students = self.students.read().await;
        Ok(students
            .values()
            .find(|student| student.email().as_str() == email)
            .cloned())
    }

    async fn find_by_matriculation_number(
        &self,
        matriculation_number: &str,
    ) -> Result<Option<Student>, StudentStoreError> {
        let students = self.students.read().await;
        Ok(students.get(matriculation_number).cloned())
    }

    async fn email_exists(&self, email: &Email) -> Result<bool, StudentStoreError> {
        self.find_by_email(email.as_str())
            .await
            .map(|found| found.is_some())
    }

    async fn matriculation_number_exists(
        &self,
        matriculation_number: &MatriculationNumber,
    ) -> Result<bool, StudentStoreError> {
        let students = self.students.read().await;
        Ok(students.contains_key(matriculation_number.as_str()))
    }

    async fn list_students(&self) -> Result<Vec<Student>, StudentStoreError> {
        let students = self.students.read().await;
        Ok(students.values().cloned().collect())
    }
}
