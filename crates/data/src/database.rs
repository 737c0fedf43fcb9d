use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// `SQLite` storage handle for the trade ledger.
///
/// Owns the connection pool and applies schema migrations on connect, so a
/// fresh database file comes up with the trades table and its seed row.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects to the database at `database_url` and runs outstanding migrations.
    ///
    /// # Arguments
    ///
    /// * `database_url` - `SQLite` connection string (e.g. `sqlite://trades.db?mode=rwc`)
    /// * `max_connections` - Pool size
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("schema migrations applied");

        Ok(Self { pool })
    }

    /// Creates an in-memory database for tests and local experiments.
    ///
    /// Limited to a single connection: every pooled `:memory:` connection
    /// would otherwise get its own empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// The underlying connection pool, for constructing repositories.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
