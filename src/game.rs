//! Turn engine: whose shot it is, what each shot did, and who has won.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{BoardError, GameError, ShotOutcome};
use crate::config::{Rules, Variant, BOARD_SIZE};
use crate::participant::{Participant, ShotHistory};
use crate::player::Player;

/// Current state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The participant at this index is shooting.
    Turn(usize),
    /// The participant at `winner` sank the whole opposing fleet.
    Over { winner: usize },
}

/// What a single call to [`Game::fire`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: usize,
    pub target: (usize, usize),
    pub outcome: ShotOutcome,
    /// Status after the shot was resolved.
    pub status: GameStatus,
}

/// The information a move source may look at before choosing a target.
pub struct TurnView<'a> {
    pub rules: &'a Rules,
    pub own: &'a Board,
    pub opponent: &'a Board,
    pub shots: &'a ShotHistory,
}

/// End-of-game (or mid-game) snapshot suitable for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub variant: Variant,
    pub players: [String; 2],
    pub winner: Option<String>,
    pub shots_fired: [usize; 2],
    pub ships_afloat: [usize; 2],
}

pub struct Game {
    rules: Rules,
    sides: [Participant; 2],
    status: GameStatus,
    shots_fired: [usize; 2],
}

impl Game {
    /// Start a game; `first` shoots first.
    pub fn new(rules: Rules, first: Participant, second: Participant) -> Self {
        Self {
            rules,
            sides: [first, second],
            status: GameStatus::Turn(0),
            shots_fired: [0; 2],
        }
    }

    /// Start a game with both fleets laid out at random.
    pub fn with_random_fleets<R: Rng>(
        rules: Rules,
        names: [&str; 2],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let first = Participant::with_random_fleet(names[0], &rules, rng)?;
        let second = Participant::with_random_fleet(names[1], &rules, rng)?;
        Ok(Self::new(rules, first, second))
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the participant whose turn it is, or `None` once the game is over.
    pub fn current(&self) -> Option<usize> {
        match self.status {
            GameStatus::Turn(i) => Some(i),
            GameStatus::Over { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::Turn(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Participant at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    pub fn participant(&self, index: usize) -> &Participant {
        assert!(index < 2, "participant index {} is not 0 or 1", index);
        &self.sides[index]
    }

    pub fn shots_fired(&self) -> [usize; 2] {
        self.shots_fired
    }

    /// What participant `index` is allowed to see when choosing a target.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    pub fn view(&self, index: usize) -> TurnView<'_> {
        assert!(index < 2, "participant index {} is not 0 or 1", index);
        TurnView {
            rules: &self.rules,
            own: self.sides[index].board(),
            opponent: self.sides[1 - index].board(),
            shots: self.sides[index].shots(),
        }
    }

    /// Fire the current participant's shot at (`row`, `col`) on the opposing board.
    ///
    /// A repeat of a cell already in the shooter's history is reported as
    /// `AlreadyTried` without touching either board or the turn. Hit and Kill
    /// keep the turn, Miss passes it. After every shot both fleets are
    /// checked and the first side found with nothing afloat loses.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        let shooter = self.current().ok_or(GameError::GameOver)?;
        let target = 1 - shooter;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col }.into());
        }

        let outcome = if self.sides[shooter].record_shot(row, col)? {
            self.shots_fired[shooter] += 1;
            self.sides[target].board_mut().attack(row, col)?
        } else {
            ShotOutcome::AlreadyTried
        };
        debug!(
            "{} fires at ({}, {}): {:?}",
            self.sides[shooter].name(),
            row,
            col,
            outcome
        );

        self.status = match outcome {
            ShotOutcome::Miss => GameStatus::Turn(target),
            ShotOutcome::Hit | ShotOutcome::Kill(_) | ShotOutcome::AlreadyTried => {
                GameStatus::Turn(shooter)
            }
        };
        for side in [shooter, target] {
            if self.sides[side].board().all_sunk() {
                let winner = 1 - side;
                info!("{} wins", self.sides[winner].name());
                self.status = GameStatus::Over { winner };
                break;
            }
        }

        Ok(ShotReport {
            shooter,
            target: (row, col),
            outcome,
            status: self.status,
        })
    }

    /// Ask the current participant's move source for a target and fire it.
    /// Both move sources are told the outcome.
    pub fn play_turn(
        &mut self,
        players: &mut [Box<dyn Player>; 2],
        rng: &mut SmallRng,
    ) -> Result<ShotReport, GameError> {
        let shooter = self.current().ok_or(GameError::GameOver)?;
        let target = players[shooter].select_target(rng, &self.view(shooter))?;
        let report = self.fire(target.0, target.1)?;
        players[shooter].handle_shot_result(target, report.outcome);
        players[1 - shooter].handle_opponent_shot(target, report.outcome);
        Ok(report)
    }

    /// Run turns until somebody wins and return the winner's index.
    pub fn play(
        &mut self,
        players: &mut [Box<dyn Player>; 2],
        rng: &mut SmallRng,
    ) -> Result<usize, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_turn(players, rng)?;
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            variant: self.rules.variant,
            players: [
                self.sides[0].name().to_owned(),
                self.sides[1].name().to_owned(),
            ],
            winner: self.winner().map(|w| self.sides[w].name().to_owned()),
            shots_fired: self.shots_fired,
            ships_afloat: [
                self.sides[0].board().afloat_count(),
                self.sides[1].board().afloat_count(),
            ],
        }
    }
}
