use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::handlers::ErrorResponse;
use crate::model::AlbumId;

/// Failures loading or reading the album catalog
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read album fixture {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid album fixture {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("duplicate album id {0}")]
    DuplicateId(AlbumId),

    #[error("album {0} has an invalid price")]
    InvalidPrice(AlbumId),
}

/// Failures fetching remote or on-disk data
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {location} failed: {source}")]
    Http {
        location: String,
        source: reqwest::Error,
    },

    #[error("{location} answered with status {status}")]
    Status {
        location: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },

    #[error("invalid data from {location}: {source}")]
    Decode {
        location: String,
        source: serde_json::Error,
    },

    #[error("sales source {location} not allowed: {reason}")]
    Disallowed { location: String, reason: String },
}

/// A chart layout that cannot produce a plotting area
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("chart {name} must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("band padding must be in [0, 1), got {0}")]
    BandPadding(f64),

    #[error("margins leave no plotting area in a {width}x{height} chart")]
    NoPlotArea { width: f64, height: f64 },
}

/// Errors surfaced to HTTP callers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}
