use crate::config::DatabaseSettings;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .max_lifetime(settings.max_lifetime)
        .idle_timeout(settings.idle_timeout)
        .connect(&settings.url)
        .await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
