use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

/// Creates the products table unless it already exists.
pub async fn ensure_schema(pool: &ConnectionPool) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| {
        error!("❌ Failed to create products table: {:?}", e);
        RepositoryError::from(e)
    })?;

    info!("✅ Products table ready");
    Ok(())
}
