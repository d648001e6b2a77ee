use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = 3999.99)]
    pub price: f64,
    #[schema(example = "Gaming laptop")]
    pub description: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description.unwrap_or_default(),
        }
    }
}
