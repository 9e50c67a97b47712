use matric_adapters::{config, crypto::Argon2PasswordHasher, persistence::HashMapStudentStore};
use matric_service_lib::AuthService;
use serde_json::{Value, json};

/// A full service instance listening on a random local port, backed by the
/// in-memory store and the real Argon2 hasher.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let student_store = HashMapStudentStore::new();
        let password_hasher = Argon2PasswordHasher::new();
        let app = AuthService::new(student_store, password_hasher).into_router(None);

        let listener = tokio::net::TcpListener::bind(config::test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_register(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute register request")
    }

    pub async fn post_login_email(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/login/email", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    pub async fn post_login_matriculation(
        &self,
        matriculation_number: &str,
        password: &str,
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/login/matriculation", self.address))
            .json(&json!({
                "matriculationNumber": matriculation_number,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    pub async fn get_students(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/auth/students", self.address))
            .send()
            .await
            .expect("Failed to execute students request")
    }
}

pub fn registration_body(
    matriculation_number: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Value {
    json!({
        "matriculationNumber": matriculation_number,
        "name": name,
        "email": email,
        "password": password,
    })
}
