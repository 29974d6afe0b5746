//! AlbumStore Core
//!
//! Storage-agnostic domain types, traits, and error handling for AlbumStore.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `NewAlbum`, `AlbumPatch`
//! - **Core Traits**: `AlbumStorage`, the capability set every backend provides
//! - **Error Handling**: Unified `AlbumError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use albumstore_core::types::{Album, AlbumPatch};
//!
//! let mut album = Album::new(1, "Blue Train", "John Coltrane", 56.99);
//!
//! let patch = AlbumPatch {
//!     artist: Some("Coltrane".to_string()),
//!     price: Some(0.0),
//!     ..AlbumPatch::default()
//! };
//! patch.apply_to(&mut album);
//!
//! assert_eq!(album.artist, "Coltrane");
//! assert_eq!(album.price, 56.99);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{AlbumError, Result};
pub use storage::AlbumStorage;
pub use types::{Album, AlbumId, AlbumPatch, NewAlbum};
