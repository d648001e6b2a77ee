use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch all products: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} products", products.len());

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
