use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::enums::Player;
use crate::errors::GameResult;
use crate::game::{Game, Position};
use crate::store::{GameStore, InMemoryGameStore};
use crate::GameId;

/// Result of a placement or a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub game: Game,
    pub winner: Option<Player>,
}

impl TurnOutcome {
    pub fn message(&self) -> Option<String> {
        self.winner.map(|w| format!("{} wins!", w))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub game: Game,
    pub valid_moves: Vec<Position>,
}

/// Core application service for game management.
///
/// Every operation looks the game up first, so an unknown id is reported
/// before anything about the request itself. Position fields arrive as raw
/// JSON and are turned into `Position`s only after that lookup.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryGameStore::new()))
    }

    /// Create a new game in the placing phase with X to move.
    pub fn start_game(&self) -> GameResult<(GameId, Game)> {
        let game_id = Uuid::new_v4().to_string();
        let game = Game::new();
        self.store.insert(game_id.clone(), game.clone())?;
        log::info!("Created game {}", game_id);
        Ok((game_id, game))
    }

    pub fn get_game(&self, game_id: &str) -> GameResult<Game> {
        self.store.get(game_id)
    }

    pub fn place(&self, game_id: &str, position: &Value) -> GameResult<TurnOutcome> {
        let mut game = self.store.get(game_id)?;
        let position = Position::from_json(position)?;

        let winner = game.place(position)?;
        self.store.save(game_id, game.clone())?;
        log::debug!("Game {}: placed at {}", game_id, position);

        Ok(TurnOutcome { game, winner })
    }

    pub fn select(&self, game_id: &str, position: &Value) -> GameResult<Selection> {
        let mut game = self.store.get(game_id)?;
        let position = Position::from_json(position)?;

        let valid_moves = game.select(position)?;
        self.store.save(game_id, game.clone())?;
        log::debug!("Game {}: selected {} -> {:?}", game_id, position, valid_moves);

        Ok(Selection { game, valid_moves })
    }

    pub fn move_piece(&self, game_id: &str, from: &Value, to: &Value) -> GameResult<TurnOutcome> {
        let mut game = self.store.get(game_id)?;
        let from = Position::from_json(from)?;
        let to = Position::from_json(to)?;

        let winner = game.move_piece(from, to)?;
        self.store.save(game_id, game.clone())?;
        log::debug!("Game {}: moved {} -> {}", game_id, from, to);

        Ok(TurnOutcome { game, winner })
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Phase;
    use crate::errors::GameError;
    use serde_json::json;

    fn started(service: &GameService) -> GameId {
        service.start_game().unwrap().0
    }

    #[test]
    fn test_start_game_is_stored() {
        let service = GameService::in_memory();
        let (id, game) = service.start_game().unwrap();
        assert_eq!(game, Game::new());
        assert_eq!(service.get_game(&id).unwrap(), game);
    }

    #[test]
    fn test_ids_are_unique() {
        let service = GameService::in_memory();
        let a = started(&service);
        let b = started(&service);
        assert_ne!(a, b);
        assert!(service.get_game(&a).is_ok());
        assert!(service.get_game(&b).is_ok());
    }

    #[test]
    fn test_not_found_reported_before_position() {
        let service = GameService::in_memory();
        assert!(matches!(
            service.place("missing", &json!(42)),
            Err(GameError::GameNotFound { .. })
        ));
        assert!(matches!(
            service.select("missing", &json!("4")),
            Err(GameError::GameNotFound { .. })
        ));
        assert!(matches!(
            service.move_piece("missing", &json!(1.5), &Value::Null),
            Err(GameError::GameNotFound { .. })
        ));
    }

    #[test]
    fn test_out_of_range_position() {
        let service = GameService::in_memory();
        let id = started(&service);
        assert_eq!(
            service.place(&id, &json!(9)),
            Err(GameError::InvalidPosition { value: "9".into() })
        );
        assert_eq!(service.get_game(&id).unwrap(), Game::new());
    }

    #[test]
    fn test_winning_message() {
        let service = GameService::in_memory();
        let id = started(&service);
        for p in [0, 3, 1, 4] {
            let outcome = service.place(&id, &json!(p)).unwrap();
            assert_eq!(outcome.message(), None);
        }
        let outcome = service.place(&id, &json!(2)).unwrap();
        assert_eq!(outcome.message().as_deref(), Some("X wins!"));
        assert_eq!(outcome.game.current_player, Player::X);
        assert_eq!(service.get_game(&id).unwrap(), outcome.game);
    }

    #[test]
    fn test_failed_move_is_not_saved() {
        let service = GameService::in_memory();
        let id = started(&service);
        for p in [0, 1, 2, 3, 7, 4] {
            service.place(&id, &json!(p)).unwrap();
        }
        let before = service.get_game(&id).unwrap();
        assert_eq!(before.phase, Phase::Moving);

        assert!(service.move_piece(&id, &json!(2), &json!(6)).is_err());
        assert_eq!(service.get_game(&id).unwrap(), before);

        let selection = service.select(&id, &json!(7)).unwrap();
        assert_eq!(selection.valid_moves.len(), 2);
        assert_eq!(service.get_game(&id).unwrap(), selection.game);

        let outcome = service.move_piece(&id, &json!(7), &json!(6)).unwrap();
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.game.selected_piece, None);
        assert_eq!(service.get_game(&id).unwrap(), outcome.game);
    }
}
