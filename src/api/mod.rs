use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

pub mod auth;
mod bookmarks;
mod current_user;
mod entries;
mod error;
mod lookups;
mod observability;
mod system;
pub mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use crate::services::{BookmarkService, EntryService, LookupService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn entry_service(&self) -> &Arc<dyn EntryService> {
        &self.shared.entry_service
    }

    #[must_use]
    pub fn bookmark_service(&self) -> &Arc<dyn BookmarkService> {
        &self.shared.bookmark_service
    }

    #[must_use]
    pub fn lookup_service(&self) -> &Arc<dyn LookupService> {
        &self.shared.lookup_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config().server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .merge(create_journal_router(state.clone()))
        .route("/health", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(observability::request_logging))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

/// Every journal route resolves the caller first. Anonymous reads pass; the
/// handlers themselves demand a signed-in user where needed.
fn create_journal_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/entries",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route(
            "/entries/{id}",
            get(entries::get_entry)
                .put(entries::update_entry)
                .patch(entries::update_entry)
                .delete(entries::delete_entry),
        )
        .route(
            "/bookmarks",
            get(bookmarks::list_bookmarks).post(bookmarks::create_bookmark),
        )
        .route(
            "/bookmarks/{id}",
            get(bookmarks::get_bookmark).delete(bookmarks::delete_bookmark),
        )
        .route("/types", get(lookups::list_types).post(lookups::create_type))
        .route(
            "/types/{id}",
            get(lookups::get_type).delete(lookups::delete_type),
        )
        .route("/colors", get(lookups::list_colors))
        .route("/colors/{id}", get(lookups::get_color))
        .route("/ratings", get(lookups::list_ratings))
        .route("/ratings/{id}", get(lookups::get_rating))
        .route("/current_user", get(current_user::get_current_user))
        .route_layer(middleware::from_fn_with_state(state, auth::auth_middleware))
}
