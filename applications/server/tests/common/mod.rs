//! Common test utilities and fixtures
#![allow(dead_code)]

use albumstore_core::{
    types::{Album, AlbumId, NewAlbum},
    AlbumError, AlbumStorage,
};
use albumstore_server::{create_router, AppState};
use albumstore_storage::SqliteAlbumStore;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Create a router over a file-backed test database with migrations applied
///
/// The `TempDir` must be kept alive for as long as the router is used.
pub async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let store = SqliteAlbumStore::open(&db_url, 5)
        .await
        .expect("Failed to open test database");

    let app = create_router(AppState::new(Arc::new(store)));
    (app, temp_dir)
}

/// Create a router over a backend whose calls fail
pub fn create_broken_app(exists: Option<bool>) -> Router {
    create_router(AppState::new(Arc::new(BrokenStore { exists })))
}

/// Create a router over a backend whose rows vanish before every write
pub fn create_stale_app() -> Router {
    create_router(AppState::new(Arc::new(StaleStore)))
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

/// Send a raw (possibly malformed) JSON body
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

/// Create an album through the API and return its id
pub async fn create_album(app: &Router, title: &str, artist: &str, price: f64) -> AlbumId {
    let (status, body) = send(
        app,
        Method::POST,
        "/albums",
        Some(serde_json::json!({ "title": title, "artist": artist, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body["id"].as_i64().unwrap()
}

/// Backend where every call fails, except an optionally fixed existence answer
pub struct BrokenStore {
    pub exists: Option<bool>,
}

fn broken() -> AlbumError {
    AlbumError::Database("disk I/O error".to_string())
}

#[async_trait]
impl AlbumStorage for BrokenStore {
    async fn create_album(&self, _album: NewAlbum) -> albumstore_core::Result<AlbumId> {
        Err(broken())
    }

    async fn get_album(&self, _id: AlbumId) -> albumstore_core::Result<Option<Album>> {
        Err(broken())
    }

    async fn get_all_albums(&self) -> albumstore_core::Result<Vec<Album>> {
        Err(broken())
    }

    async fn album_exists(&self, _id: AlbumId) -> albumstore_core::Result<bool> {
        self.exists.ok_or_else(broken)
    }

    async fn update_album(&self, _album: &Album) -> albumstore_core::Result<bool> {
        Err(broken())
    }

    async fn delete_album(&self, _id: AlbumId) -> albumstore_core::Result<bool> {
        Err(broken())
    }
}

/// Backend that finds album 1 on read but never touches a row on write
pub struct StaleStore;

#[async_trait]
impl AlbumStorage for StaleStore {
    async fn create_album(&self, _album: NewAlbum) -> albumstore_core::Result<AlbumId> {
        Err(broken())
    }

    async fn get_album(&self, id: AlbumId) -> albumstore_core::Result<Option<Album>> {
        Ok(Some(Album::new(id, "A", "B", 9.99)))
    }

    async fn get_all_albums(&self) -> albumstore_core::Result<Vec<Album>> {
        Ok(Vec::new())
    }

    async fn album_exists(&self, _id: AlbumId) -> albumstore_core::Result<bool> {
        Ok(true)
    }

    async fn update_album(&self, _album: &Album) -> albumstore_core::Result<bool> {
        Ok(false)
    }

    async fn delete_album(&self, _id: AlbumId) -> albumstore_core::Result<bool> {
        Ok(false)
    }
}
