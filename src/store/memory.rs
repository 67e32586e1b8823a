use std::collections::HashSet;
use std::path::Path;

use crate::error::StoreError;
use crate::model::Album;
use crate::seed;
use crate::store::traits::AlbumStore;

/// Fixed album list held for the lifetime of the process
#[derive(Debug, Clone)]
pub struct InMemoryAlbumStore {
    albums: Vec<Album>,
}

impl InMemoryAlbumStore {
    /// Rejects duplicate ids and negative or non-finite prices.
    pub fn new(albums: Vec<Album>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for album in &albums {
            if !seen.insert(album.id) {
                return Err(StoreError::DuplicateId(album.id));
            }
            if !album.price.is_finite() || album.price < 0.0 {
                return Err(StoreError::InvalidPrice(album.id));
            }
        }
        Ok(Self { albums })
    }

    /// The built-in demo catalog
    pub fn with_fixture() -> Self {
        Self {
            albums: seed::fixture_albums(),
        }
    }

    /// Load a JSON array of albums from disk
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
            path: display.clone(),
            source,
        })?;
        let albums: Vec<Album> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: display,
                source,
            })?;

        Self::new(albums)
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

#[async_trait::async_trait]
impl AlbumStore for InMemoryAlbumStore {
    async fn list_albums(&self) -> Result<Vec<Album>, StoreError> {
        Ok(self.albums.clone())
    }
}
