use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::handlers::{self, AppState};
use crate::store::AlbumStore;

pub fn create_router<S: AlbumStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Album catalog
        .route("/albums", get(handlers::list_albums::<S>))
        .route("/albums/sorted", get(handlers::list_sorted_albums::<S>))
        .route("/albums/:id", get(handlers::get_album::<S>))
        // Sales chart data
        .route("/sales/chart", get(handlers::get_sales_chart::<S>))
        // Input validation
        .route("/validate/date", get(handlers::validate_date::<S>))
        .route("/validate/identifier", get(handlers::validate_identifier::<S>))
}

/// Router with state and middleware applied, ready to serve
pub fn build_app<S: AlbumStore + 'static>(state: AppState<S>) -> Router {
    create_router::<S>()
        .with_state(state)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}
