// src/game/engine.rs
use serde::{Deserialize, Serialize};

use super::board::{Board, Position};
use crate::enums::{Phase, Player, PLAYERS};
use crate::errors::{GameError, GameResult};

pub const PIECES_PER_PLAYER: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecesPlaced {
    #[serde(rename = "X")]
    pub x: u8,
    #[serde(rename = "O")]
    pub o: u8,
}

impl PiecesPlaced {
    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    pub fn all_placed(&self) -> bool {
        PLAYERS.iter().all(|&p| self.get(p) == PIECES_PER_PLAYER)
    }
}

/// One three men's morris game. Mutated in place by `place`, `select` and
/// `move_piece`; a rejected call leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub board: Board,
    pub current_player: Player,
    pub phase: Phase,
    pub pieces_placed: PiecesPlaced,
    pub selected_piece: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Player::X,
            phase: Phase::Placing,
            pieces_placed: PiecesPlaced::default(),
            selected_piece: None,
            winner: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    fn ensure_active(&self, expected: Phase) -> GameResult<()> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameOver { winner });
        }
        if self.phase != expected {
            return Err(GameError::InvalidPhase { expected });
        }
        Ok(())
    }

    fn ensure_own_piece(&self, position: Position) -> GameResult<()> {
        if self.board.get(position) != Some(self.current_player) {
            return Err(GameError::NotYourPiece { position });
        }
        Ok(())
    }

    /// Puts a new piece for the current player. Returns the winner if this
    /// placement completed a line; the turn does not pass on a win.
    pub fn place(&mut self, position: Position) -> GameResult<Option<Player>> {
        self.ensure_active(Phase::Placing)?;
        if !self.board.is_empty_at(position) {
            return Err(GameError::OccupiedPosition { position });
        }

        let player = self.current_player;
        self.board.set(position, Some(player));
        self.pieces_placed.increment(player);

        if let Some(winner) = self.check_winner() {
            return Ok(Some(winner));
        }

        if self.pieces_placed.all_placed() {
            log::debug!("All pieces placed, entering moving phase");
            self.phase = Phase::Moving;
        }
        self.current_player = player.opponent();
        Ok(None)
    }

    /// Marks one of the current player's pieces as selected and returns the
    /// empty positions it may slide to.
    pub fn select(&mut self, position: Position) -> GameResult<Vec<Position>> {
        self.ensure_active(Phase::Moving)?;
        self.ensure_own_piece(position)?;

        let valid_moves = self.board.open_neighbors(position);
        if valid_moves.is_empty() {
            return Err(GameError::NoValidMoves { position });
        }

        self.selected_piece = Some(position);
        Ok(valid_moves)
    }

    /// Slides a piece to an adjacent empty position. Returns the winner if the
    /// move completed a line.
    pub fn move_piece(&mut self, from: Position, to: Position) -> GameResult<Option<Player>> {
        self.ensure_active(Phase::Moving)?;
        self.ensure_own_piece(from)?;
        if !self.board.is_empty_at(to) {
            return Err(GameError::OccupiedPosition { position: to });
        }
        if !from.is_adjacent(to) {
            return Err(GameError::NotAdjacent { from, to });
        }

        let player = self.current_player;
        self.board.set(to, Some(player));
        self.board.set(from, None);
        self.selected_piece = None;

        if let Some(winner) = self.check_winner() {
            return Ok(Some(winner));
        }

        self.current_player = player.opponent();
        Ok(None)
    }

    fn check_winner(&mut self) -> Option<Player> {
        let winner = self.board.winner()?;
        log::info!("{} completed a line", winner);
        self.winner = Some(winner);
        Some(winner)
    }

    /// Pieces of the current player that have at least one empty neighbour.
    /// Empty outside the moving phase.
    pub fn movable_pieces(&self) -> Vec<Position> {
        if self.phase != Phase::Moving || self.is_over() {
            return Vec::new();
        }
        Position::all()
            .filter(|&p| self.board.get(p) == Some(self.current_player))
            .filter(|&p| !self.board.open_neighbors(p).is_empty())
            .collect()
    }
}
