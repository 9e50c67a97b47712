pub mod list_students;
pub mod login;
pub mod register;
