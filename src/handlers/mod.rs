// src/handlers/mod.rs
pub mod extract;
pub mod game;

use axum::http::Method;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::application::GameService;

pub type SharedState = Arc<GameService>;

/// API routes only, no static files.
pub fn api_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(game::health))
        .route("/start3", post(game::start_game))
        .route("/game/{game_id}", get(game::get_game))
        .route("/place", post(game::place_piece))
        .route("/select", post(game::select_piece))
        .route("/move3", post(game::move_piece))
        .with_state(state)
}

/// Full application: API routes, static files for everything else, and CORS.
pub fn build_router(state: SharedState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    api_router(state)
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(cors)
}
