use askama::Template;
use axum::{
    Router,
    http::{StatusCode, header::LOCATION},
    response::{Html, IntoResponse},
    routing::get,
};
use shared::errors::HttpError;
use tracing::{error, info};

#[derive(Template, Debug)]
#[template(path = "client.html")]
pub struct ClientTemplate<'a> {
    pub title: &'a str,
}

#[derive(Template, Debug)]
#[template(path = "admin.html")]
pub struct AdminTemplate<'a> {
    pub title: &'a str,
}

fn render_page<T: Template>(name: &str, template: &T) -> Result<Html<String>, HttpError> {
    match template.render() {
        Ok(html) => {
            info!("📄 Rendered {name} page");
            Ok(Html(html))
        }
        Err(e) => {
            error!("❌ Failed to render {name} page: {e}");
            Err(HttpError::Internal(e.to_string()))
        }
    }
}

pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/client")])
}

/// Read-only catalog.
pub async fn client_page() -> Result<Html<String>, HttpError> {
    render_page(
        "client",
        &ClientTemplate {
            title: "Nasze Produkty",
        },
    )
}

/// Add, edit and delete controls over the same JSON endpoints.
pub async fn admin_page() -> Result<Html<String>, HttpError> {
    render_page(
        "admin",
        &AdminTemplate {
            title: "Panel Administratora",
        },
    )
}

pub fn page_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/client", get(client_page))
        .route("/admin", get(admin_page))
}
