use crate::error::StoreError;
use crate::logic::find_by_id;
use crate::model::{Album, AlbumId};

/// Read access to the album catalog.
///
/// Query logic receives the albums from a store at call time, so a database
/// backed store can replace the in-memory one without touching sorting.
#[async_trait::async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums in store order
    async fn list_albums(&self) -> Result<Vec<Album>, StoreError>;

    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>, StoreError> {
        let albums = self.list_albums().await?;
        Ok(find_by_id(&albums, id).cloned())
    }
}
