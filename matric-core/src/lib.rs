pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    display_name::DisplayName,
    email::Email,
    matriculation_number::MatriculationNumber,
    password::{HashedPassword, Password},
    student::{Student, StudentError, StudentProfile},
};

pub use ports::{
    repositories::{StudentStore, StudentStoreError},
    services::{PasswordHasher, PasswordHasherError},
};
