use matric_adapters::{
    config::ServiceSettings, crypto::Argon2PasswordHasher, persistence::PostgresStudentStore,
};
use matric_service_lib::{AuthService, configure_postgresql, init_tracing};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    dotenvy::dotenv().ok();
    let settings = ServiceSettings::load();

    let pg_pool = configure_postgresql().await;
    let student_store = PostgresStudentStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher::new();

    let app = AuthService::new(student_store, password_hasher)
        .into_router(settings.app.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
