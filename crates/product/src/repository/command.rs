use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, product: &CreateProductRequest) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price, description)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        let id = result.last_insert_rowid();

        info!("✅ Created product ID {} ({})", id, product.name);
        Ok(id)
    }

    async fn update_product(&self, product: &UpdateProductRequest) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?,
                price = ?,
                description = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", product.id, err);
            RepositoryError::from(err)
        })?;

        let updated = result.rows_affected() > 0;

        info!("🔄 Update of product ID {} matched: {}", product.id, updated);
        Ok(updated)
    }

    async fn delete_product(&self, id: i64) -> Result<bool, RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        let deleted = result.rows_affected() > 0;

        info!("✅ Delete of product ID {} matched: {}", id, deleted);
        Ok(deleted)
    }
}
