//! AlbumStore Storage
//!
//! `SQLite` database layer for AlbumStore.
//!
//! This crate provides persistent storage for albums behind the
//! [`AlbumStorage`](albumstore_core::AlbumStorage) trait.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `albums` module owns its queries
//! - **Constraint-backed**: title uniqueness lives in the schema, so create
//!   and delete are single conditional statements
//! - **Embedded migrations**: the schema ships inside the binary and is
//!   applied idempotently at startup
//!
//! # Example
//!
//! ```rust,no_run
//! use albumstore_storage::{SqliteAlbumStore, create_pool, run_migrations};
//! use albumstore_core::AlbumStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://albums.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteAlbumStore::new(pool);
//!
//! // Get all albums
//! let albums = store.get_all_albums().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod albums;

pub use context::SqliteAlbumStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://albums.db>`)
/// * `max_connections` - upper bound on pooled connections
///
/// The parent directory of a file-backed database is created if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the connection fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("Pool created with {} max connections", max_connections);

    Ok(pool)
}
