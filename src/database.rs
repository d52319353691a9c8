use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Durable store for the application data, extensions are implemented separately in every module.
#[derive(Clone)]
pub struct Database {
    pub(crate) pool: PgPool,
}

impl Database {
    /// Creates a new database instance from the existing pool and applies pending migrations.
    pub async fn create(pool: PgPool) -> anyhow::Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }

    /// Opens a connection pool to the database described by the config.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .database(&config.name);
        if let Some(ref password) = config.password {
            options = options.password(password);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to the database at {}:{}",
                    config.host, config.port
                )
            })?;

        Self::create(pool).await
    }

    /// Waits for all active connections to be released and closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
