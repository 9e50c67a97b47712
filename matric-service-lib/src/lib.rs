pub mod helpers;
pub mod router;
pub mod tracing;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use router::AuthService;
pub use self::tracing::init_tracing;
