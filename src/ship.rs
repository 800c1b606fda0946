//! Ship definitions and footprints.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship within the board that owns it.
pub type ShipId = usize;

/// A ship placed on the board. Its footprint never changes once built;
/// only the hit counter moves.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// Lay out a ship starting at (`row`, `col`) and extending right or down.
    /// Fails with `ShipOutOfBounds` if any cell would leave the board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        if len == 0 || row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        let end = match orientation {
            Orientation::Horizontal => col.checked_add(len),
            Orientation::Vertical => row.checked_add(len),
        };
        if end.map_or(true, |end| end > BOARD_SIZE) {
            return Err(BoardError::ShipOutOfBounds);
        }

        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            cells,
            hits: 0,
        })
    }

    /// Count one hit. Saturates at the ship's length so the counter can never
    /// exceed it. Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits,
            self.ship_type.length(),
        )
    }
}
