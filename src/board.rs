//! Board state: a grid of tagged cells plus the ships placed on it.

use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{Rules, BOARD_SIZE};
use crate::ship::{Orientation, Ship, ShipId, ShipType};

/// State of a single grid cell. Shot-related states are terminal: once a
/// cell leaves `Empty` or `Ship` it never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Intact segment of the ship with this id.
    Ship(ShipId),
    /// Damaged segment of a ship still afloat.
    Hit,
    Miss,
    /// Segment of a sunk ship.
    Destroyed,
}

impl Cell {
    /// Whether a shot has already landed here.
    pub fn is_shot(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss | Cell::Destroyed)
    }
}

pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    afloat: Vec<ShipId>,
    adjacency_buffer: bool,
}

impl Board {
    /// Empty board. With `adjacency_buffer` set, ships may not touch each
    /// other, not even at a corner.
    pub fn new(adjacency_buffer: bool) -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            afloat: Vec::new(),
            adjacency_buffer,
        }
    }

    pub fn for_rules(rules: &Rules) -> Self {
        Self::new(rules.adjacency_buffer)
    }

    pub fn adjacency_buffer(&self) -> bool {
        self.adjacency_buffer
    }

    /// Cell at (`row`, `col`), or `None` off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Every ship ever placed, sunk or not, indexed by [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn placed_count(&self) -> usize {
        self.ships.len()
    }

    /// Ships not yet sunk.
    pub fn afloat(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.afloat.iter().map(move |&id| &self.ships[id])
    }

    pub fn afloat_count(&self) -> usize {
        self.afloat.len()
    }

    /// Returns `true` when no ship remains afloat.
    pub fn all_sunk(&self) -> bool {
        self.afloat.is_empty()
    }

    /// Number of cells marked destroyed.
    pub fn destroyed_cells(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Destroyed)
            .count()
    }

    /// Check whether `ship` could be placed without touching the board.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        for (r, c) in ship.cells() {
            if self.grid[r][c] != Cell::Empty {
                return Err(BoardError::ShipOverlaps);
            }
        }
        if self.adjacency_buffer {
            for (r, c) in ship.cells() {
                for (nr, nc) in neighbours(r, c) {
                    if self.grid[nr][nc] != Cell::Empty {
                        return Err(BoardError::ShipTooClose);
                    }
                }
            }
        }
        Ok(())
    }

    /// Place a ship at (`row`, `col`) extending right or down. On error the
    /// board is left untouched.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let ship = Ship::new(ship_type, orientation, row, col)?;
        self.check_placement(&ship)?;

        let id = self.ships.len();
        for (r, c) in ship.cells() {
            self.grid[r][c] = Cell::Ship(id);
        }
        debug!(
            "placed {} at ({}, {}) {:?}",
            ship_type.name(),
            row,
            col,
            orientation
        );
        self.ships.push(ship);
        self.afloat.push(id);
        Ok(id)
    }

    /// Boolean form of [`Board::place`].
    pub fn try_place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        self.place(ship_type, row, col, orientation).is_ok()
    }

    /// Sample (row, col, orientation) until one fits, at most `max_attempts`
    /// times. Rows and columns are drawn over the whole grid; draws that
    /// would run off the edge count as failed attempts.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
        max_attempts: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        for _ in 0..max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let fits = Ship::new(ship_type, orientation, row, col)
                .and_then(|ship| self.check_placement(&ship))
                .is_ok();
            if fits {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip {
            name: ship_type.name(),
            attempts: max_attempts,
        })
    }

    /// Place each ship of `fleet` at a random legal spot. Stops at the first
    /// ship that cannot be placed; ships placed before it stay on the board,
    /// so callers must discard the board on error.
    pub fn place_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        for &ship_type in fleet {
            let (row, col, orientation) = self
                .random_placement(rng, ship_type, max_attempts)
                .inspect_err(|e| warn!("{}", e))?;
            self.place(ship_type, row, col, orientation)?;
        }
        Ok(())
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Sinking a ship turns all of its cells into [`Cell::Destroyed`] and
    /// drops it from the afloat list. Repeat shots report `AlreadyTried`
    /// and change nothing.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        let cell = self
            .cell(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        match cell {
            shot if shot.is_shot() => Ok(ShotOutcome::AlreadyTried),
            Cell::Ship(id) => {
                let sunk = self.ships[id].register_hit();
                self.grid[row][col] = Cell::Hit;
                if !sunk {
                    return Ok(ShotOutcome::Hit);
                }
                let ship = &self.ships[id];
                for (r, c) in ship.cells() {
                    self.grid[r][c] = Cell::Destroyed;
                }
                self.afloat.retain(|&i| i != id);
                Ok(ShotOutcome::Kill(ship.name()))
            }
            _ => {
                self.grid[row][col] = Cell::Miss;
                Ok(ShotOutcome::Miss)
            }
        }
    }
}

/// In-bounds cells within Chebyshev distance 1 of (`row`, `col`), itself included.
fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..=(row + 1).min(BOARD_SIZE - 1);
    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(BOARD_SIZE - 1);
        cols.map(move |c| (r, c))
    })
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("adjacency_buffer", &self.adjacency_buffer)
            .field("ships", &self.ships)
            .field("afloat", &self.afloat)
            .finish()
    }
}
