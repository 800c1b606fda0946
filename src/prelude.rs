//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, CliPlayer, Game, GameStatus, Orientation, Participant, Player, Rules,
    ShipType, ShotOutcome, Variant, BOARD_SIZE,
};
