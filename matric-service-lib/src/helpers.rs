use matric_adapters::config::ServiceSettings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool.
///
/// Loads the database URL from configuration, creates the pool and runs all
/// pending migrations.
///
/// # Panics
/// Panics if the pool cannot be created or a migration fails; the service
/// cannot do anything useful without its store.
pub async fn configure_postgresql() -> PgPool {
    let settings = ServiceSettings::load();

    let pg_pool = get_postgres_pool(
        settings.postgres.url.expose_secret(),
        settings.postgres.max_connections,
    )
    .await
    .expect("Failed to create Postgres connection pool");

    sqlx::migrate!("../matric-service-bin/migrations")
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

/// Create a PostgreSQL connection pool for the given URL.
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
