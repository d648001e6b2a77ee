use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Product not found".to_string())
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let id = self.command.create_product(req).await.map_err(|e| {
            error!("❌ Failed to create product '{}': {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        info!("✅ Product created: '{}' (ID: {id})", req.name);

        Ok(ProductResponse {
            id,
            name: req.name.clone(),
            price: req.price,
            description: req.description.clone(),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Updating product ID: {}", req.id);

        let updated = self.command.update_product(req).await.map_err(|e| {
            error!("❌ Failed to update product ID {}: {e:?}", req.id);
            ServiceError::Repo(e)
        })?;

        if !updated {
            warn!("⚠️ Product ID {} not found for update", req.id);
            return Err(not_found());
        }

        info!("✅ Product updated: '{}' (ID: {})", req.name, req.id);

        Ok(ProductResponse {
            id: req.id,
            name: req.name.clone(),
            price: req.price,
            description: req.description.clone(),
        })
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        info!("🧨 Deleting product ID: {id}");

        let deleted = self.command.delete_product(id).await.map_err(|e| {
            error!("❌ Failed to delete product ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if !deleted {
            warn!("⚠️ Product ID {id} not found for delete");
            return Err(not_found());
        }

        info!("✅ Product ID {id} deleted");
        Ok(())
    }
}
