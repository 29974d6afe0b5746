use crate::{albums, create_pool, run_migrations, StorageError};
use albumstore_core::{
    error::Result,
    storage::AlbumStorage,
    types::{Album, AlbumId, NewAlbum},
};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Album storage backed by `SQLite`
#[derive(Clone)]
pub struct SqliteAlbumStore {
    pool: SqlitePool,
}

impl SqliteAlbumStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool and bring the schema up to date
    pub async fn open(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url, max_connections).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStorage for SqliteAlbumStore {
    async fn create_album(&self, album: NewAlbum) -> Result<AlbumId> {
        tracing::debug!(title = %album.title, "Inserting album");
        albums::create(&self.pool, album).await
    }

    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn get_all_albums(&self) -> Result<Vec<Album>> {
        albums::get_all(&self.pool).await
    }

    async fn album_exists(&self, id: AlbumId) -> Result<bool> {
        albums::exists(&self.pool, id).await
    }

    async fn update_album(&self, album: &Album) -> Result<bool> {
        tracing::debug!(id = album.id, "Updating album");
        albums::update(&self.pool, album).await
    }

    async fn delete_album(&self, id: AlbumId) -> Result<bool> {
        tracing::debug!(id, "Deleting album");
        albums::delete(&self.pool, id).await
    }
}
