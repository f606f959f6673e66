// Three men's morris server library
//
// Rules engine, game store, and the HTTP layer that exposes them.

// Core game data structures and enums
pub mod enums;
pub mod errors;
pub mod game;

// Persistence and orchestration
pub mod application;
pub mod store;

// Server implementation
pub mod config;
pub mod handlers;

// Re-export common types for convenient access
pub use crate::application::{GameService, Selection, TurnOutcome};
pub use crate::config::ServerConfig;
pub use crate::enums::{Phase, Player};
pub use crate::errors::{GameError, GameResult};
pub use crate::game::{Board, Game, PiecesPlaced, Position};
pub use crate::store::{GameStore, InMemoryGameStore};

pub type GameId = String;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
