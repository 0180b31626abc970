use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::Router;
use stubmart_core::config::AppConfig;
use stubmart_core::CatalogStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub store: Arc<CatalogStore>,
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    let store = Arc::new(CatalogStore::new());
    info!(
        event_name = "system.bootstrap.catalog_seeded",
        total = store.len(),
        "catalog store seeded"
    );

    Application { config, store }
}

/// Assemble the full route table: the JSON routes behind the charset-pinning
/// header layer, the docs pages beside them, permissive CORS over everything.
pub fn api_router(store: Arc<CatalogStore>) -> Router {
    let json_routes = crate::products::router(store.clone())
        .merge(crate::health::router(store))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ));

    Router::new()
        .merge(json_routes)
        .merge(crate::docs::router())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}
