use std::io::{self, BufRead, Stdout, StdinLock, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::common::{BoardError, GameError, ShotOutcome};
use crate::config::{InputStyle, BOARD_SIZE};
use crate::game::TurnView;
use crate::input::{parse_index, parse_pair};
use crate::ui::render_views;

use super::Player;

/// Interactive player reading targets from `input` and writing prompts,
/// boards and feedback to `output`.
pub struct CliPlayer<R, W> {
    name: String,
    style: InputStyle,
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process console.
    pub fn stdio(name: impl Into<String>, style: InputStyle) -> Self {
        Self::new(name, style, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, style: InputStyle, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            style,
            input,
            output,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    /// Read until a well-formed, in-range coordinate arrives.
    fn read_coordinate(&mut self) -> Result<(usize, usize), GameError> {
        let last = BOARD_SIZE - 1;
        loop {
            let parsed = match self.style {
                InputStyle::SeparatePrompts => {
                    let line = self.prompt(&format!("{}, enter row (0-{}): ", self.name, last))?;
                    match parse_index(&line, BOARD_SIZE) {
                        Ok(row) => {
                            let line = self
                                .prompt(&format!("{}, enter column (0-{}): ", self.name, last))?;
                            parse_index(&line, BOARD_SIZE).map(|col| (row, col))
                        }
                        Err(e) => Err(e),
                    }
                }
                InputStyle::SingleLine => {
                    let line = self.prompt(&format!("{}, enter your move (e.g., 0 0): ", self.name))?;
                    parse_pair(&line, BOARD_SIZE)
                }
            };
            match parsed {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> Result<(usize, usize), GameError> {
        writeln!(
            self.output,
            "{}",
            render_views(view.own, view.opponent, &view.rules.glyphs, "Enemy field")
        )?;
        loop {
            let (row, col) = self.read_coordinate()?;
            if view.shots.get(row, col).map_err(BoardError::from)? {
                writeln!(
                    self.output,
                    "You've hit this cell previously. Please choose another coordinates."
                )?;
                continue;
            }
            return Ok((row, col));
        }
    }

    fn handle_shot_result(&mut self, _coord: (usize, usize), outcome: ShotOutcome) {
        let line = match outcome {
            ShotOutcome::Hit => "Hit! You get another turn.".to_owned(),
            ShotOutcome::Kill(name) => {
                format!("You sunk the enemy {}! You get another turn.", name)
            }
            ShotOutcome::Miss => "Missed!".to_owned(),
            ShotOutcome::AlreadyTried => "Already attacked this position!".to_owned(),
        };
        if let Err(e) = writeln!(self.output, "{}", line) {
            warn!("could not report shot result: {}", e);
        }
    }

    fn handle_opponent_shot(&mut self, coord: (usize, usize), outcome: ShotOutcome) {
        let what = match outcome {
            ShotOutcome::Hit => "hit your ship".to_owned(),
            ShotOutcome::Kill(name) => format!("sunk your {}", name),
            ShotOutcome::Miss => "missed".to_owned(),
            ShotOutcome::AlreadyTried => return,
        };
        if let Err(e) = writeln!(self.output, "Enemy {} at ({}, {})", what, coord.0, coord.1) {
            warn!("could not report opponent shot: {}", e);
        }
    }
}
