// src/game/mod.rs
mod board;
mod engine;

pub use board::*;
pub use engine::*;
