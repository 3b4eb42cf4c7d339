use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{any, get},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_catalog::CatalogClient;
use storefront_core::{AppConfig, MessageCatalog};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};
use crate::pages::{catch_all, not_found_boundary};

#[derive(Debug, Clone)]
pub struct AppState {
    pub messages: MessageCatalog,
    pub products: CatalogClient,
}

impl AppState {
    /// Wires the translation catalog and product client from configuration.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let products = CatalogClient::new(
            &config.api_base_url,
            config.api_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self {
            messages: MessageCatalog::from_dir(config.messages_dir.clone()),
            products,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

/// Builds the router.
///
/// Only the health check is a real route here. Everything under a locale
/// prefix hits the catch-all, everything else hits the fallback, and both
/// end up at the not-found page via [`not_found_boundary`].
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/{locale}/{*rest}", any(catch_all))
        .fallback(catch_all)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    not_found_boundary,
                )),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
