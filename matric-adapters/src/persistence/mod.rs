pub mod hashmap_student_store;
pub mod postgres_student_store;

pub use hashmap_student_store::HashMapStudentStore;
pub use postgres_student_store::PostgresStudentStore;
