pub mod error;
pub mod login_by_email;
pub mod login_by_matriculation;
pub mod register;
pub mod students;

pub use error::AuthApiError;
pub use login_by_email::{LoginByEmailRequest, login_by_email};
pub use login_by_matriculation::{LoginByMatriculationRequest, login_by_matriculation};
pub use register::{RegisterRequest, register};
pub use students::students;
