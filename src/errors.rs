use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::game::Position;
use crate::enums::{Phase, Player};

/// Every way a game request can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game not found")]
    GameNotFound { game_id: String },

    #[error("Game is not in {expected} phase")]
    InvalidPhase { expected: Phase },

    #[error("Position {position} is already occupied")]
    OccupiedPosition { position: Position },

    #[error("Not your piece")]
    NotYourPiece { position: Position },

    #[error("This piece has no valid moves")]
    NoValidMoves { position: Position },

    #[error("Invalid move. Positions must be adjacent")]
    NotAdjacent { from: Position, to: Position },

    #[error("Invalid position {value}: expected an integer from 0 to 8")]
    InvalidPosition { value: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("Game is already over: {winner} won")]
    GameOver { winner: Player },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub fn not_found(game_id: impl Into<String>) -> Self {
        Self::GameNotFound {
            game_id: game_id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::GameNotFound { .. } => StatusCode::NOT_FOUND,
            GameError::InvalidRequest { status, .. } => *status,
            GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for GameError {
    fn from(rejection: JsonRejection) -> Self {
        GameError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Rejected request: {:?}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
