//! Storage trait for album persistence

use crate::error::Result;
use crate::types::{Album, AlbumId, NewAlbum};
use async_trait::async_trait;

/// Capability set every album backend provides
///
/// The HTTP layer only talks to this trait, so the same handlers run against
/// `SQLite` in production and against stub backends in tests.
#[async_trait]
pub trait AlbumStorage: Send + Sync {
    /// Insert a new album and return its id
    ///
    /// Fails with `AlbumError::Duplicate` when the title is already taken;
    /// in that case nothing is written.
    async fn create_album(&self, album: NewAlbum) -> Result<AlbumId>;

    /// Get a single album, including its `created` timestamp
    async fn get_album(&self, id: AlbumId) -> Result<Option<Album>>;

    /// Get all albums ordered by id, without `created`
    async fn get_all_albums(&self) -> Result<Vec<Album>>;

    /// Check whether an album with this id exists
    async fn album_exists(&self, id: AlbumId) -> Result<bool>;

    /// Overwrite title, artist and price of an existing album
    ///
    /// Returns `false` when no row has `album.id`.
    async fn update_album(&self, album: &Album) -> Result<bool>;

    /// Delete an album, returning `false` when no row was removed
    async fn delete_album(&self, id: AlbumId) -> Result<bool>;
}
