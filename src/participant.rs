//! One side of a game: a name, the board it defends and where it has fired.

use log::info;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::board::Board;
use crate::common::BoardError;
use crate::config::{Rules, BOARD_SIZE};

/// Cells a participant has fired at on the opposing board.
pub type ShotHistory = BitBoard<u64, BOARD_SIZE>;

pub struct Participant {
    name: String,
    board: Board,
    shots: ShotHistory,
}

impl Participant {
    /// Wrap an already populated board.
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
            shots: ShotHistory::new(),
        }
    }

    /// Build a participant with a randomly placed fleet.
    ///
    /// Any placement that runs out of attempts throws the whole board away
    /// and starts over; after `rules.setup_restarts` such restarts this
    /// gives up with `SetupExhausted`.
    pub fn with_random_fleet<R: Rng>(
        name: impl Into<String>,
        rules: &Rules,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let name = name.into();
        for restart in 0..=rules.setup_restarts {
            if restart > 0 {
                info!("restarting fleet setup for {} (restart {})", name, restart);
            }
            let mut board = Board::for_rules(rules);
            match board.place_randomly(rng, rules.fleet, rules.placement_attempts) {
                Ok(()) => return Ok(Self::new(name, board)),
                Err(BoardError::UnableToPlaceShip { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::SetupExhausted {
            restarts: rules.setup_restarts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give up the participant, keeping only its board.
    pub fn into_board(self) -> Board {
        self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn shots(&self) -> &ShotHistory {
        &self.shots
    }

    /// Record a shot. Returns `false` if this cell was already in the history.
    pub(crate) fn record_shot(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if self.shots.get(row, col)? {
            return Ok(false);
        }
        self.shots.set(row, col)?;
        Ok(true)
    }
}
