use log::warn;
use reqwest::StatusCode;

use crate::error::SourceError;
use crate::model::{Album, AlbumId};

/// HTTP client for a running album catalog service.
///
/// Album properties are matched case-insensitively on the way in, so both
/// `{"title": ..}` and `{"Title": ..}` payloads decode.
#[derive(Debug, Clone)]
pub struct AlbumClient {
    client: reqwest::Client,
    base_url: String,
}

impl AlbumClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full album listing, or an empty list when the service cannot be
    /// reached or answers with something other than an album array.
    pub async fn fetch_albums(&self) -> Vec<Album> {
        match self.try_fetch_albums().await {
            Ok(albums) => albums,
            Err(e) => {
                warn!("Album listing unavailable: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_fetch_albums(&self) -> Result<Vec<Album>, SourceError> {
        self.get_json(&format!("{}/albums", self.base_url)).await
    }

    pub async fn try_fetch_sorted(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<Album>, SourceError> {
        let url = format!("{}/albums/sorted", self.base_url);
        let ascending = ascending.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("sortBy", sort_by), ("ascending", ascending.as_str())])
            .send()
            .await
            .map_err(|source| SourceError::Http {
                location: url.clone(),
                source,
            })?;
        Self::decode(&url, response).await
    }

    /// `Ok(None)` when the service reports the album as not found
    pub async fn try_fetch_album(&self, id: AlbumId) -> Result<Option<Album>, SourceError> {
        let url = format!("{}/albums/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                location: url.clone(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(&url, response).await.map(Some)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SourceError::Http {
                location: url.to_string(),
                source,
            })?;
        Self::decode(url, response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, SourceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                location: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| SourceError::Http {
            location: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| SourceError::Decode {
            location: url.to_string(),
            source,
        })
    }
}
