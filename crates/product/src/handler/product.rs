use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{
            CreateProductPayload, CreateProductRequest, DeleteProductParams,
            UpdateProductPayload, UpdateProductRequest,
        },
        response::{
            api::{ApiMessage, ApiResponse},
            product::ProductResponse,
        },
    },
    middleware::validate::{PayloadJson, QueryParams},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/items",
    tag = "Product",
    responses(
        (status = 200, description = "All products, ascending by id", body = Vec<ProductResponse>),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "Product",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    PayloadJson(payload): PayloadJson<CreateProductPayload>,
) -> Result<impl IntoResponse, HttpError> {
    let req = CreateProductRequest::try_from(payload)?;

    let product = service.create_product(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(product, "Product added successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/items",
    tag = "Product",
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Missing id or malformed field", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    PayloadJson(payload): PayloadJson<UpdateProductPayload>,
) -> Result<impl IntoResponse, HttpError> {
    let req = UpdateProductRequest::try_from(payload)?;

    let product = service.update_product(&req).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(product, "Product updated successfully")),
    ))
}

#[utoipa::path(
    delete,
    path = "/items",
    tag = "Product",
    params(DeleteProductParams),
    responses(
        (status = 200, description = "Product deleted", body = ApiMessage),
        (status = 400, description = "Missing or malformed id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> Result<impl IntoResponse, HttpError> {
    let id = DeleteProductParams::from_pairs(pairs).product_id()?;

    service.delete_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiMessage::new("Product deleted successfully")),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/items",
            get(get_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
