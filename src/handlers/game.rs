// src/handlers/game.rs
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::extract::ApiJson;
use super::SharedState;
use crate::application::TurnOutcome;
use crate::errors::GameResult;
use crate::game::{Game, Position};
use crate::GameId;

// Fields stay untyped so an unknown game id is reported before a bad position.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRequest {
    #[serde(default)]
    pub game_id: Value,
    #[serde(default)]
    pub position: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(default)]
    pub game_id: Value,
    #[serde(default)]
    pub from_position: Value,
    #[serde(default)]
    pub to_position: Value,
}

/// A non-string id can never match a stored game, so it is looked up as-is
/// and comes back as `GameNotFound`.
fn game_id_of(value: &Value) -> GameId {
    match value {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub game_id: GameId,
    pub game: Game,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub game: Game,
    /// Current player's pieces that can still slide; empty outside the
    /// moving phase or when the player is blocked.
    pub movable_pieces: Vec<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GameResponse {
    fn new(game: Game, message: Option<String>) -> Self {
        let movable_pieces = game.movable_pieces();
        GameResponse {
            game,
            movable_pieces,
            message,
        }
    }
}

impl From<TurnOutcome> for GameResponse {
    fn from(outcome: TurnOutcome) -> Self {
        let message = outcome.message();
        GameResponse::new(outcome.game, message)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectResponse {
    pub game: Game,
    pub valid_moves: Vec<Position>,
}

pub async fn health() -> &'static str {
    "ok"
}

// Start a new game
pub async fn start_game(State(service): State<SharedState>) -> GameResult<Json<StartResponse>> {
    let (game_id, game) = service.start_game()?;
    Ok(Json(StartResponse { game_id, game }))
}

// Get a game state
pub async fn get_game(
    State(service): State<SharedState>,
    Path(game_id): Path<GameId>,
) -> GameResult<Json<GameResponse>> {
    log::debug!("Getting game with ID: {}", game_id);
    let game = service.get_game(&game_id)?;
    Ok(Json(GameResponse::new(game, None)))
}

// Place a piece (placing phase)
pub async fn place_piece(
    State(service): State<SharedState>,
    ApiJson(req): ApiJson<PositionRequest>,
) -> GameResult<Json<GameResponse>> {
    let game_id = game_id_of(&req.game_id);
    let outcome = service.place(&game_id, &req.position)?;
    if let Some(message) = outcome.message() {
        log::info!("Game {}: {}", game_id, message);
    }
    Ok(Json(outcome.into()))
}

// Select a piece to move (first half of a moving turn)
pub async fn select_piece(
    State(service): State<SharedState>,
    ApiJson(req): ApiJson<PositionRequest>,
) -> GameResult<Json<SelectResponse>> {
    let selection = service.select(&game_id_of(&req.game_id), &req.position)?;
    Ok(Json(SelectResponse {
        game: selection.game,
        valid_moves: selection.valid_moves,
    }))
}

// Move the selected piece (second half of a moving turn)
pub async fn move_piece(
    State(service): State<SharedState>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> GameResult<Json<GameResponse>> {
    let game_id = game_id_of(&req.game_id);
    let outcome = service.move_piece(&game_id, &req.from_position, &req.to_position)?;
    if let Some(message) = outcome.message() {
        log::info!("Game {}: {}", game_id, message);
    }
    Ok(Json(outcome.into()))
}
