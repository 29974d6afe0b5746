/// Albums API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use albumstore_core::{
    types::{Album, AlbumId, AlbumPatch, NewAlbum},
    AlbumError,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Serialize)]
pub struct CreateAlbumResponse {
    pub message: String,
    pub id: AlbumId,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /albums
pub async fn create_album(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateAlbumResponse>)> {
    let album: NewAlbum = parse_body(&body)?;
    album.validate()?;

    let id = app_state.store.create_album(album).await?;
    tracing::info!(id, "Album created");

    Ok((
        StatusCode::CREATED,
        Json(CreateAlbumResponse {
            message: "Album created successfully".to_string(),
            id,
        }),
    ))
}

/// GET /albums
pub async fn list_albums(State(app_state): State<AppState>) -> Result<Json<Vec<Album>>> {
    let albums = app_state.store.get_all_albums().await?;
    Ok(Json(albums))
}

/// GET /albums/:id
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Album>> {
    let id = parse_id(&id)?;
    let album = app_state
        .store
        .get_album(id)
        .await?
        .ok_or(AlbumError::NotFound(id))?;
    Ok(Json(album))
}

/// PUT /albums/update/:id
///
/// The album must exist before the body is looked at, so an unknown id
/// wins over a malformed payload.
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Album>> {
    let id = parse_id(&id)?;
    let mut album = app_state
        .store
        .get_album(id)
        .await?
        .ok_or(AlbumError::NotFound(id))?;

    let patch: AlbumPatch = parse_body(&body)?;
    patch.validate()?;
    patch.apply_to(&mut album);

    // Row may have been deleted since it was loaded
    if !app_state.store.update_album(&album).await? {
        return Err(AlbumError::NotFound(id).into());
    }
    tracing::info!(id, "Album updated");

    Ok(Json(album))
}

/// DELETE /albums/delete/:id
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    let exists = app_state.store.album_exists(id).await.map_err(|e| {
        tracing::error!("Error checking album existence: {}", e);
        ServerError::Internal("Failed to check album existence".to_string())
    })?;
    if !exists {
        return Err(AlbumError::NotFound(id).into());
    }

    let deleted = app_state.store.delete_album(id).await.map_err(|e| {
        tracing::warn!("Error deleting album: {}", e);
        ServerError::BadRequest("Failed to delete album".to_string())
    })?;
    if !deleted {
        return Err(AlbumError::NotFound(id).into());
    }
    tracing::info!(id, "Album deleted");

    Ok(Json(MessageResponse {
        message: "Album deleted successfully".to_string(),
    }))
}

fn parse_id(raw: &str) -> Result<AlbumId> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid album id: {}", raw)))
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid request body: {}", e)))
}
