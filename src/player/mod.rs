//! Move sources.
//!
//! A [`Player`] decides where its participant fires next:
//! - AiPlayer: uniform random targets
//! - CliPlayer: targets typed on a console

use rand::rngs::SmallRng;

use crate::common::{GameError, ShotOutcome};
use crate::game::TurnView;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target. Implementations must not return a cell
    /// already present in `view.shots`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> Result<(usize, usize), GameError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
