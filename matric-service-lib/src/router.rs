use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use matric_adapters::{
    config::AllowedOrigins,
    http::{
        AppState,
        routes::{login_by_email, login_by_matriculation, register, students},
    },
};
use matric_core::{PasswordHasher, StudentStore};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled authentication service: every route from the HTTP boundary
/// wired to a student store and a password hasher.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService over the given store and hasher.
    ///
    /// Both are cloned into the shared route state, so they must be cheap
    /// handles (pool wrappers, `Arc`-backed maps).
    pub fn new<S, H>(student_store: S, password_hasher: H) -> Self
    where
        S: StudentStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let state = AppState {
            student_store,
            password_hasher,
        };

        let router = Router::new()
            .route("/auth/students", get(students::<S, H>))
            .route("/auth/register", post(register::<S, H>))
            .route("/auth/login/email", post(login_by_email::<S, H>))
            .route(
                "/auth/login/matriculation",
                post(login_by_matriculation::<S, H>),
            )
            .with_state(state);

        Self { router }.with_trace_layer()
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finish the router, optionally restricting browser callers to the
    /// configured origins.
    pub fn into_router(self, allowed_origins: Option<AllowedOrigins>) -> Router {
        match allowed_origins {
            Some(allowed_origins) => {
                let cors = CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST])
                    .allow_credentials(true)
                    .allow_origin(AllowOrigin::predicate(
                        move |origin: &HeaderValue, _request_parts: &request::Parts| {
                            allowed_origins.contains(origin)
                        },
                    ));
                self.router.layer(cors)
            }
            None => self.router,
        }
    }
}
