use crate::domain::requests::product::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

/// Single-statement writes against the products table.
///
/// Update and delete report whether a row matched; they never look the row
/// up first.
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Returns the id the store assigned.
    async fn create_product(&self, req: &CreateProductRequest) -> Result<i64, RepositoryError>;
    async fn update_product(&self, req: &UpdateProductRequest) -> Result<bool, RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<bool, RepositoryError>;
}
