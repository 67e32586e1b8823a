use axum::response::{IntoResponse, Json, Response};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;

use crate::api::handlers::CatalogState;
use crate::error::ApiError;
use crate::logic::{self, ChartModel};
use crate::model::{Album, AlbumId, SortSpec};
use crate::store::{check_request_source, fetch_sales_or_empty, AlbumStore};

/// Every operation the catalog service answers, decoded from HTTP by the
/// router and handled by [`dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRequest {
    ListAlbums,
    GetAlbum { id: AlbumId },
    SortedAlbums { sort_by: String, ascending: bool },
    SalesChart { source: Option<String> },
    ValidateDate { value: String },
    ValidateIdentifier { value: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Albums(Vec<Album>),
    Album(Album),
    Chart(ChartResponse),
    Date(DateValidationResponse),
    Identifier(IdentifierValidationResponse),
}

impl IntoResponse for CatalogResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartResponse {
    Ready { chart: ChartModel },
    NoData { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateValidationResponse {
    pub valid: bool,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifierValidationResponse {
    pub valid: bool,
}

pub async fn dispatch<S: AlbumStore>(
    state: &CatalogState<S>,
    request: CatalogRequest,
) -> Result<CatalogResponse, ApiError> {
    debug!("Dispatching {:?}", request);

    match request {
        CatalogRequest::ListAlbums => {
            let albums = state.store.list_albums().await?;
            Ok(CatalogResponse::Albums(albums))
        }
        CatalogRequest::GetAlbum { id } => {
            let albums = state.store.list_albums().await?;
            match logic::find_by_id(&albums, id) {
                Some(album) => Ok(CatalogResponse::Album(album.clone())),
                None => {
                    info!("Album {} requested but not in catalog", id);
                    Err(ApiError::NotFound(format!("Album with ID {} not found", id)))
                }
            }
        }
        CatalogRequest::SortedAlbums { sort_by, ascending } => {
            let spec = SortSpec::parse(&sort_by, ascending);
            if spec.field.is_none() {
                debug!("Unrecognized sortBy '{}', returning catalog order", sort_by);
            }
            let albums = state.store.list_albums().await?;
            Ok(CatalogResponse::Albums(logic::sort_by_spec(&albums, &spec)))
        }
        CatalogRequest::SalesChart { source } => {
            // The configured default may be a local path; caller input may not
            let location = match source {
                Some(location) => {
                    check_request_source(&location, &state.allowed_sales_hosts).map_err(|e| {
                        warn!("Rejected sales source: {}", e);
                        ApiError::BadRequest(e.to_string())
                    })?;
                    location
                }
                None => state.default_sales_source.clone().ok_or_else(|| {
                    ApiError::BadRequest(
                        "No sales data source given and none configured".to_string(),
                    )
                })?,
            };

            let records = fetch_sales_or_empty(&state.http, &location).await;
            let response = match logic::prepare_with_layout(&records, state.chart_layout) {
                Some(chart) => ChartResponse::Ready { chart },
                None => ChartResponse::NoData {
                    message: "No data available".to_string(),
                },
            };
            Ok(CatalogResponse::Chart(response))
        }
        CatalogRequest::ValidateDate { value } => {
            let date = logic::validate_date(&value);
            Ok(CatalogResponse::Date(DateValidationResponse {
                valid: date.is_some(),
                date,
            }))
        }
        CatalogRequest::ValidateIdentifier { value } => {
            Ok(CatalogResponse::Identifier(IdentifierValidationResponse {
                valid: logic::validate_identifier(&value),
            }))
        }
    }
}
