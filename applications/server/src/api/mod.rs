/// API route modules
pub mod albums;
pub mod health;

use crate::{error::ServerError, state::AppState};
use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full HTTP router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Albums
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route("/albums/:id", get(albums::get_album))
        .route("/albums/update/:id", put(albums::update_album))
        .route("/albums/delete/:id", delete(albums::delete_album))
        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn route_not_found() -> ServerError {
    ServerError::NotFound("Route not found".to_string())
}
