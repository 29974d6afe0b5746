//! Album types

use crate::error::{AlbumError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned album identifier
pub type AlbumId = i64;

/// Largest price a `NUMERIC(10,2)` column can hold
pub const MAX_PRICE: f64 = 99_999_999.99;

/// Longest title or artist accepted, in characters
pub const MAX_TEXT_LEN: usize = 100;

/// An album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    /// Insert time, only populated on single-album reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Album {
    /// Create an album without a `created` timestamp
    pub fn new(id: AlbumId, title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            price,
            created: None,
        }
    }
}

/// Data for creating a new album
///
/// `id` and `created` are server-assigned; if a client sends them they are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Reject blank text fields and prices the column cannot store
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AlbumError::invalid_input("title is required"));
        }
        if self.artist.trim().is_empty() {
            return Err(AlbumError::invalid_input("artist is required"));
        }
        validate_len("title", &self.title)?;
        validate_len("artist", &self.artist)?;
        validate_price(self.price)
    }
}

/// Partial update payload
///
/// Every field is optional. When merged, a field that is absent, blank text,
/// or a price that rounds to zero leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
}

impl AlbumPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_len("title", title)?;
        }
        if let Some(artist) = &self.artist {
            validate_len("artist", artist)?;
        }
        match self.price {
            Some(price) => validate_price(price),
            None => Ok(()),
        }
    }

    /// Merge this patch over an existing album
    pub fn apply_to(self, album: &mut Album) {
        if let Some(title) = self.title.filter(|t| !t.trim().is_empty()) {
            album.title = title;
        }
        if let Some(artist) = self.artist.filter(|a| !a.trim().is_empty()) {
            album.artist = artist;
        }
        if let Some(price) = self.price.map(round_price).filter(|p| *p != 0.0) {
            album.price = price;
        }
    }
}

/// Round to whole cents, matching a two-digit fixed-point column
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

fn validate_len(field: &str, value: &str) -> Result<()> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AlbumError::invalid_input(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(AlbumError::invalid_input("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(AlbumError::invalid_input("price must not be negative"));
    }
    if round_price(price) > MAX_PRICE {
        return Err(AlbumError::invalid_input(format!(
            "price must not exceed {}",
            MAX_PRICE
        )));
    }
    Ok(())
}
