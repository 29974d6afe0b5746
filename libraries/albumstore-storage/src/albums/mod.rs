use albumstore_core::{
    error::{AlbumError, Result},
    types::{round_price, Album, AlbumId, NewAlbum},
};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// List projection: `created` is not selected
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query("SELECT id, title, artist, price FROM albums ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| -> Result<Album> {
            Ok(Album::new(
                row.try_get("id")?,
                row.try_get::<String, _>("title")?,
                row.try_get::<String, _>("artist")?,
                row.try_get("price")?,
            ))
        })
        .collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query("SELECT id, title, artist, price, created FROM albums WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(full_album).transpose()
}

pub async fn exists(pool: &SqlitePool, id: AlbumId) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM albums WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Insert unless the title is taken; a taken title writes nothing
pub async fn create(pool: &SqlitePool, album: NewAlbum) -> Result<AlbumId> {
    let id: Option<AlbumId> = sqlx::query_scalar(
        "INSERT INTO albums (title, artist, price)
         VALUES (?, ?, ?)
         ON CONFLICT(title) DO NOTHING
         RETURNING id",
    )
    .bind(&album.title)
    .bind(&album.artist)
    .bind(round_price(album.price))
    .fetch_optional(pool)
    .await?;

    id.ok_or_else(|| AlbumError::duplicate(album.title))
}

/// Writes all mutable fields, changed or not
pub async fn update(pool: &SqlitePool, album: &Album) -> Result<bool> {
    let result = sqlx::query("UPDATE albums SET title = ?, artist = ?, price = ? WHERE id = ?")
        .bind(&album.title)
        .bind(&album.artist)
        .bind(round_price(album.price))
        .bind(album.id)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AlbumError::duplicate(album.title.clone())
            }
            other => other.into(),
        })?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: AlbumId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn full_album(row: &SqliteRow) -> Result<Album> {
    let created: i64 = row.try_get("created")?;
    let created = DateTime::<Utc>::from_timestamp(created, 0)
        .ok_or_else(|| AlbumError::storage(format!("Invalid timestamp: {}", created)))?;

    Ok(Album {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        price: row.try_get("price")?,
        created: Some(created),
    })
}
