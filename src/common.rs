//! Common types: shot outcomes and the error enums shared across modules.

use std::io;

use crate::bitboard::BitBoardError;

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Struck a ship that is still afloat.
    Hit,
    /// Struck the last intact cell of a ship, carrying its name.
    Kill(&'static str),
    /// Open water.
    Miss,
    /// The cell was fired at before; nothing changed.
    AlreadyTried,
}

/// Errors returned by board and setup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    BitBoardError(BitBoardError),
    /// Target cell lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Some footprint cell would leave the grid.
    ShipOutOfBounds,
    /// Footprint overlaps a placed ship.
    ShipOverlaps,
    /// Footprint touches a placed ship, including diagonally.
    ShipTooClose,
    /// Random placement ran out of attempts for the named ship.
    UnableToPlaceShip { name: &'static str, attempts: usize },
    /// A participant's fleet could not be laid out even after restarting.
    SetupExhausted { restarts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTooClose => write!(f, "Ship placement touches another ship"),
            BoardError::UnableToPlaceShip { name, attempts } => {
                write!(f, "Failed to place {} after {} attempts", name, attempts)
            }
            BoardError::SetupExhausted { restarts } => {
                write!(f, "Could not lay out the fleet after {} restarts", restarts)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors surfaced by the turn engine and move sources.
#[derive(Debug)]
pub enum GameError {
    Board(BoardError),
    /// Console I/O failed.
    Io(io::Error),
    /// The input stream ended while waiting for a move.
    InputClosed,
    /// A shot was requested after a winner was declared.
    GameOver,
    /// Every cell has already been fired at.
    NoTargetsLeft,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::Io(e) => write!(f, "I/O error: {}", e),
            GameError::InputClosed => write!(f, "Input closed"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::NoTargetsLeft => write!(f, "No untried cells left to fire at"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}
