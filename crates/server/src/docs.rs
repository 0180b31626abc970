//! Static API documentation: a Swagger UI page over the bundled OpenAPI
//! document. Purely descriptive — the behavioral contract lives in the
//! product routes.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

const OPENAPI_DOCUMENT: &str = include_str!("../../../swagger.json");
const DOCS_PAGE: &str = include_str!("../../../templates/docs/index.html");

pub fn router() -> Router {
    Router::new().route("/docs", get(docs_page)).route("/docs/openapi.json", get(openapi_document))
}

async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

async fn openapi_document() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json; charset=utf-8")], OPENAPI_DOCUMENT)
}

#[cfg(test)]
mod tests {
    use super::{DOCS_PAGE, OPENAPI_DOCUMENT};

    #[test]
    fn bundled_document_parses_and_describes_every_route() {
        let document: serde_json::Value =
            serde_json::from_str(OPENAPI_DOCUMENT).expect("swagger.json is valid JSON");

        let paths = document["paths"].as_object().expect("paths object");
        for path in ["/__reset", "/products", "/products/add", "/products/{id}"] {
            assert!(paths.contains_key(path), "openapi document should describe {path}");
        }

        assert!(document["paths"]["/products/{id}"]["put"].is_object());
        assert!(document["paths"]["/products/{id}"]["delete"].is_object());
    }

    #[test]
    fn docs_page_loads_the_bundled_document() {
        assert!(DOCS_PAGE.contains("/docs/openapi.json"));
    }
}
