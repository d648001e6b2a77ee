use crate::{di::DependenciesInject, repository::schema::ensure_schema};
use anyhow::{Context, Result};
use shared::config::ConnectionPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    /// Makes sure the products table exists, then wires the services over `pool`.
    pub async fn new(pool: ConnectionPool) -> Result<Self> {
        ensure_schema(&pool)
            .await
            .context("Failed to initialize products table")?;

        Ok(Self {
            di_container: DependenciesInject::new(pool),
        })
    }
}
