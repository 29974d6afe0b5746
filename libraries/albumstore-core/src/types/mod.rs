mod album;

pub use album::{round_price, Album, AlbumId, AlbumPatch, NewAlbum, MAX_PRICE, MAX_TEXT_LEN};
