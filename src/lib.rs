//! Console Battleship on a 6×6 grid, human against a random-shooting AI.
//!
//! Two rule sets share one engine: [`Variant::Classic`] lets ships touch,
//! [`Variant::Spaced`] keeps a one-cell gap around every ship.

mod bitboard;
mod board;
mod common;
mod config;
mod game;
pub mod input;
mod logging;
mod participant;
mod player;
pub mod prelude;
mod ship;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use participant::*;
pub use player::*;
pub use ship::*;
