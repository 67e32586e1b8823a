pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

use std::sync::Arc;

// Export API types
pub use api::dispatch::{dispatch, CatalogRequest, CatalogResponse};
pub use api::routes::{build_app, create_router};

pub use client::AlbumClient;
pub use error::{ApiError, LayoutError, SourceError, StoreError};

// Export logic types
pub use logic::{
    find_by_id, prepare, prepare_with_layout, sort_albums, sort_by_spec, validate_date,
    validate_identifier, ChartLayout, ChartModel,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{AlbumStore, InMemoryAlbumStore};

/// Build shared server state from configuration
pub async fn build_state(
    config: &crate::config::AppConfig,
) -> anyhow::Result<api::handlers::AppState<InMemoryAlbumStore>> {
    let store = match &config.catalog.fixture_path {
        Some(path) => {
            let store = InMemoryAlbumStore::from_json_file(path).await?;
            log::info!("Loaded {} albums from {}", store.len(), path);
            store
        }
        None => InMemoryAlbumStore::with_fixture(),
    };

    let http = reqwest::Client::builder()
        .timeout(config.sales_timeout())
        .build()?;

    Ok(Arc::new(api::handlers::CatalogState {
        store,
        http,
        default_sales_source: config.sales.default_source.clone(),
        allowed_sales_hosts: config.sales.allowed_hosts.clone(),
        chart_layout: config.chart,
    }))
}

/// Serve the catalog until the process is stopped
pub async fn run_server(config: &crate::config::AppConfig) -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    let state = build_state(config).await?;
    let app = build_app(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Album catalog running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
