use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::{GameError, GameResult};
use crate::game::Game;
use crate::GameId;

/// Where games live between requests.
///
/// Implementations hand out copies; callers write a game back with `save`
/// once a mutation has succeeded, so a concurrent write to the same id is
/// last-write-wins.
pub trait GameStore: Send + Sync {
    fn insert(&self, game_id: GameId, game: Game) -> GameResult<()>;

    /// Fails with `GameNotFound` when the id is unknown.
    fn get(&self, game_id: &str) -> GameResult<Game>;

    /// Replaces an existing game. Fails with `GameNotFound` when the id is unknown.
    fn save(&self, game_id: &str, game: Game) -> GameResult<()>;
}

/// Process-lifetime store backed by a `HashMap`. Nothing is ever evicted.
#[derive(Default)]
pub struct InMemoryGameStore {
    games: Mutex<HashMap<GameId, Game>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> GameResult<MutexGuard<'_, HashMap<GameId, Game>>> {
        self.games
            .lock()
            .map_err(|e| GameError::Internal(format!("game store lock poisoned: {}", e)))
    }
}

impl GameStore for InMemoryGameStore {
    fn insert(&self, game_id: GameId, game: Game) -> GameResult<()> {
        self.lock()?.insert(game_id, game);
        Ok(())
    }

    fn get(&self, game_id: &str) -> GameResult<Game> {
        self.lock()?
            .get(game_id)
            .cloned()
            .ok_or_else(|| GameError::not_found(game_id))
    }

    fn save(&self, game_id: &str, game: Game) -> GameResult<()> {
        let mut games = self.lock()?;
        match games.get_mut(game_id) {
            Some(slot) => {
                *slot = game;
                Ok(())
            }
            None => Err(GameError::not_found(game_id)),
        }
    }
}
