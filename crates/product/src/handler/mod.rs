mod page;
mod product;

use crate::{
    config::server_config::ServerConfig, middleware::panic::panic_response, state::AppState,
};
use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use shared::utils::shutdown_signal;
use std::{path::Path, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::page::{AdminTemplate, ClientTemplate, page_routes};
pub use self::product::product_routes;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::create_product,
        product::update_product,
        product::delete_product,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
        let shared_state = Arc::new(app_state);

        let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_routes(shared_state))
            .split_for_parts();

        let static_files = ServeDir::new(static_dir.as_ref());

        api_router
            .merge(page_routes())
            .route("/api-docs/openapi.json", get(move || async move { Json(api) }))
            .nest_service("/static", static_files)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
    }

    pub async fn serve(server_config: &ServerConfig, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state, &server_config.static_dir);

        let (host, port) = server_config.bind_addr();
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind {host}:{port}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("🛒 Catalog: http://{}/client", listener.local_addr()?);
        info!("🛠️ Admin: http://{}/admin", listener.local_addr()?);
        info!("📖 OpenAPI: http://{}/api-docs/openapi.json", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
