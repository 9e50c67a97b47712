use matric_core::{Email, MatriculationNumber, Student, StudentStore, StudentStoreError};
use sqlx::{Pool, Postgres};

/// Postgres-backed student store.
///
/// Uniqueness is enforced by the `students` table itself: the primary key on
/// `matriculation_number` and the unique index `students_email_key`. Inserts
/// that lose a race against a concurrent registration come back as the
/// matching `Duplicate*` error even though the existence checks passed.
#[derive(Clone)]
pub struct PostgresStudentStore {
    pool: sqlx::PgPool,
}

impl PostgresStudentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresStudentStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    matriculation_number: String,
    name: String,
    email: String,
    password_hash: String,
}

impl StudentRow {
    fn into_student(self) -> Result<Student, StudentStoreError> {
        Student::parse(
            self.matriculation_number,
            self.name,
            self.email,
            self.password_hash,
        )
        .map_err(|e| StudentStoreError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl StudentStore for PostgresStudentStore {
    #[tracing::instrument(name = "Inserting student into PostgreSQL", skip_all)]
    async fn insert_student(&self, student: Student) -> Result<Student, StudentStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO students (matriculation_number, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(student.matriculation_number().as_str())
        .bind(student.name().as_str())
        .bind(student.email().as_str())
        .bind(student.password_hash().expose());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return StudentStoreError::DuplicateEmail;
                    }
                    return StudentStoreError::DuplicateMatriculationNumber;
                }
            }
            StudentStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(student)
    }

    #[tracing::instrument(name = "Looking up student by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentStoreError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
                SELECT matriculation_number, name, email, password_hash
                FROM students
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StudentStoreError::UnexpectedError(e.to_string()))?;

        row.map(StudentRow::into_student).transpose()
    }

    #[tracing::instrument(name = "Looking up student by matriculation number in PostgreSQL", skip_all)]
    async fn find_by_matriculation_number(
        &self,
        matriculation_number: &str,
    ) -> Result<Option<Student>, StudentStoreError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
                SELECT matriculation_number, name, email, password_hash
                FROM students
                WHERE matriculation_number = $1
            "#,
        )
        .bind(matriculation_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StudentStoreError::UnexpectedError(e.to_string()))?;

        row.map(StudentRow::into_student).transpose()
    }

    #[tracing::instrument(name = "Checking email existence in PostgreSQL", skip_all)]
    async fn email_exists(&self, email: &Email) -> Result<bool, StudentStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM students WHERE email = $1)"#,
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StudentStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Checking matriculation number existence in PostgreSQL", skip_all)]
    async fn matriculation_number_exists(
        &self,
        matriculation_number: &MatriculationNumber,
    ) -> Result<bool, StudentStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM students WHERE matriculation_number = $1)"#,
        )
        .bind(matriculation_number.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StudentStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Listing students from PostgreSQL", skip_all)]
    async fn list_students(&self) -> Result<Vec<Student>, StudentStoreError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
                SELECT matriculation_number, name, email, password_hash
                FROM students
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StudentStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(StudentRow::into_student).collect()
    }
}
