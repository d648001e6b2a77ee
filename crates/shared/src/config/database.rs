use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

pub type ConnectionPool = Pool<Sqlite>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
    ) -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|err| anyhow::anyhow!("Invalid database url {connection_string}: {err}"))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }

    /// Single-connection pool over a private in-memory database.
    ///
    /// The connection is never recycled: closing it would drop the database.
    pub async fn in_memory() -> anyhow::Result<ConnectionPool> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|err| anyhow::anyhow!("Failed to open in-memory database: {}", err))?;

        Ok(pool)
    }
}
