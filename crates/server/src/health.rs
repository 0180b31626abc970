use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use stubmart_core::CatalogStore;

#[derive(Clone)]
pub struct HealthState {
    store: Arc<CatalogStore>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(store: Arc<CatalogStore>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { store })
}

/// The store is in-memory and cannot degrade; the check reports the current
/// record count so probes can see the collection is alive.
pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    let total = state.store.len();

    Json(HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: "stubmart-server runtime initialized".to_string(),
        },
        catalog: HealthCheck { status: "ready", detail: format!("catalog holds {total} records") },
        checked_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;
    use stubmart_core::{CatalogStore, NewProduct};

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_reports_ready_with_the_record_count() {
        let store = Arc::new(CatalogStore::new());
        store.add(NewProduct::default());

        let response = health(State(HealthState { store })).await;

        assert_eq!(response.0.status, "ready");
        assert_eq!(response.0.service.status, "ready");
        assert_eq!(response.0.catalog.status, "ready");
        assert!(response.0.catalog.detail.contains("3 records"));
        assert!(!response.0.checked_at.is_empty());
    }
}
