// src/game/board.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::enums::Player;
use crate::errors::{GameError, GameResult};

pub const BOARD_SIZE: usize = 9;

/// A validated board index in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const CENTER: Position = Position(4);

    pub fn new(value: i64) -> GameResult<Self> {
        if (0..BOARD_SIZE as i64).contains(&value) {
            Ok(Position(value as u8))
        } else {
            Err(GameError::InvalidPosition {
                value: value.to_string(),
            })
        }
    }

    /// Reads a position from a loosely typed request field. Anything other
    /// than an integer in range, including a missing field, is rejected.
    pub fn from_json(value: &Value) -> GameResult<Self> {
        match value.as_i64() {
            Some(i) => Position::new(i),
            None => Err(GameError::InvalidPosition {
                value: value.to_string(),
            }),
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Positions reachable from here by a single slide.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        ADJACENCY[self.index()].iter().map(|&i| Position(i))
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        ADJACENCY[self.index()].contains(&other.0)
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).map(Position)
    }
}

impl TryFrom<i64> for Position {
    type Error = GameError;

    fn try_from(value: i64) -> GameResult<Self> {
        Position::new(value)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Board layout:
//   0 - 1 - 2
//   | \ | / |
//   3 - 4 - 5
//   | / | \ |
//   6 - 7 - 8
const ADJACENCY: [&[u8]; BOARD_SIZE] = [
    &[1, 3, 4],
    &[0, 2, 4],
    &[1, 4, 5],
    &[0, 4, 6],
    &[0, 1, 2, 3, 5, 6, 7, 8],
    &[2, 4, 8],
    &[3, 4, 7],
    &[4, 6, 8],
    &[4, 5, 7],
];

/// Checked in order: rows, columns, then the two diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // cols
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diags
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Option<Player>; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<Player> {
        self.cells[position.index()]
    }

    pub fn set(&mut self, position: Position, player: Option<Player>) {
        self.cells[position.index()] = player;
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Empty neighbours of `position`, in adjacency table order.
    pub fn open_neighbors(&self, position: Position) -> Vec<Position> {
        position
            .neighbors()
            .filter(|&n| self.is_empty_at(n))
            .collect()
    }

    /// First completed line decides the winner.
    pub fn winner(&self) -> Option<Player> {
        WIN_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }
}
