pub mod use_cases;

pub use use_cases::{
    list_students::{ListStudentsError, ListStudentsUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase, Registration},
};
