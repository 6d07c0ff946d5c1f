use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::schema::EMPLOYEE_SCHEMA;

/// Errors from DatabaseManager and the employee stores
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Invalid database name: {0}")]
    InvalidDatabaseName(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Lazily created connection pool for the employee database
pub struct DatabaseManager {
    pool: Arc<RwLock<Option<PgPool>>>,
}

impl DatabaseManager {
    fn instance() -> &'static DatabaseManager {
        use std::sync::OnceLock;
        static INSTANCE: OnceLock<DatabaseManager> = OnceLock::new();
        INSTANCE.get_or_init(|| DatabaseManager {
            pool: Arc::new(RwLock::new(None)),
        })
    }

    /// Get the shared pool, connecting on first use
    pub async fn main_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        Self::instance().get_pool(config).await
    }

    async fn get_pool(&self, config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        // Fast path: try read lock
        {
            let pool = self.pool.read().await;
            if let Some(pool) = pool.as_ref() {
                return Ok(pool.clone());
            }
        }

        let mut slot = self.pool.write().await;
        // Another task may have connected while we waited for the write lock
        if let Some(pool) = slot.as_ref() {
            return Ok(pool.clone());
        }

        let connection_string = Self::build_connection_string(config.database_name.as_deref())?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&connection_string)
            .await?;

        *slot = Some(pool.clone());
        info!(
            "Created database pool (max_connections={})",
            config.max_connections
        );
        Ok(pool)
    }

    /// Read DATABASE_URL, optionally swapping the database name in its path
    fn build_connection_string(database_name: Option<&str>) -> Result<String, DatabaseError> {
        let base = std::env::var("DATABASE_URL")
            .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let mut url = url::Url::parse(&base).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if let Some(name) = database_name {
            if !Self::is_valid_db_name(name) {
                return Err(DatabaseError::InvalidDatabaseName(name.to_string()));
            }
            url.set_path(&format!("/{}", name));
        }
        Ok(url.into_string())
    }

    /// Create the employees table and its indexes if they are missing
    pub async fn apply_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        for statement in EMPLOYEE_SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }
        info!("Employee schema is up to date");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close() {
        let manager = Self::instance();
        if let Some(pool) = manager.pool.write().await.take() {
            pool.close().await;
            info!("Closed database pool");
        }
    }

    /// Database names are restricted to [a-zA-Z0-9_]+ since they end up in the URL path
    fn is_valid_db_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}
