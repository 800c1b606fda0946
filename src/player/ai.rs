use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, GameError};
use crate::config::BOARD_SIZE;
use crate::game::TurnView;

use super::Player;

/// Fires at uniformly random cells it has not tried yet.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> Result<(usize, usize), GameError> {
        if view.shots.is_full() {
            return Err(GameError::NoTargetsLeft);
        }
        loop {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            if !view.shots.get(row, col).map_err(BoardError::from)? {
                return Ok((row, col));
            }
        }
    }
}
