use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::dispatch::{dispatch, CatalogRequest, CatalogResponse};
use crate::error::ApiError;
use crate::logic::ChartLayout;
use crate::model::AlbumId;
use crate::store::AlbumStore;

/// Shared, read-only state behind every route
#[derive(Debug)]
pub struct CatalogState<S> {
    pub store: S,
    pub http: reqwest::Client,
    /// Trusted location used when a request names no source; may be a path
    pub default_sales_source: Option<String>,
    /// Hosts a request-supplied sales URL may point at; empty allows any
    pub allowed_sales_hosts: Vec<String>,
    pub chart_layout: ChartLayout,
}

pub type AppState<S> = Arc<CatalogState<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub ascending: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValueQuery {
    #[serde(default)]
    pub value: String,
}

pub async fn list_albums<S: AlbumStore>(
    State(state): State<AppState<S>>,
) -> Result<CatalogResponse, ApiError> {
    dispatch(&state, CatalogRequest::ListAlbums).await
}

pub async fn get_album<S: AlbumStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<AlbumId>,
) -> Result<CatalogResponse, ApiError> {
    dispatch(&state, CatalogRequest::GetAlbum { id }).await
}

/// `sortBy` defaults to the title, `ascending` to true
pub async fn list_sorted_albums<S: AlbumStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<SortQuery>,
) -> Result<CatalogResponse, ApiError> {
    let request = CatalogRequest::SortedAlbums {
        sort_by: query.sort_by.unwrap_or_else(|| "name".to_string()),
        ascending: query.ascending.unwrap_or(true),
    };
    dispatch(&state, request).await
}

pub async fn get_sales_chart<S: AlbumStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<ChartQuery>,
) -> Result<CatalogResponse, ApiError> {
    let source = query.source.filter(|s| !s.trim().is_empty());
    dispatch(&state, CatalogRequest::SalesChart { source }).await
}

pub async fn validate_date<S: AlbumStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<ValueQuery>,
) -> Result<CatalogResponse, ApiError> {
    dispatch(&state, CatalogRequest::ValidateDate { value: query.value }).await
}

pub async fn validate_identifier<S: AlbumStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<ValueQuery>,
) -> Result<CatalogResponse, ApiError> {
    dispatch(&state, CatalogRequest::ValidateIdentifier { value: query.value }).await
}
