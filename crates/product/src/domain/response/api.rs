use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A payload echoed back together with a human-readable outcome.
///
/// The payload's fields are inlined next to `message`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    #[serde(flatten)]
    pub data: T,
    #[schema(example = "Product added successfully")]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiMessage {
    #[schema(example = "Product deleted successfully")]
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
