use serde::Serialize;

use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 6;

/// Random placement tries per ship before a setup is abandoned.
pub const PLACEMENT_ATTEMPTS: usize = 70;

/// Whole-fleet restarts per participant before setup gives up.
pub const SETUP_RESTARTS: usize = 100;

pub const CLASSIC_FLEET: [ShipType; 6] = [
    ShipType::new("Battleship", 3),
    ShipType::new("Cruiser1", 2),
    ShipType::new("Cruiser2", 2),
    ShipType::new("Destroyer1", 1),
    ShipType::new("Destroyer2", 1),
    ShipType::new("Destroyer3", 1),
];

pub const SPACED_FLEET: [ShipType; 7] = [
    ShipType::new("Three-decker", 3),
    ShipType::new("Two-decker", 2),
    ShipType::new("Two-decker", 2),
    ShipType::new("One-decker", 1),
    ShipType::new("One-decker", 1),
    ShipType::new("One-decker", 1),
    ShipType::new("One-decker", 1),
];

/// Which rule set a game is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Ships may touch; row and column are entered separately.
    Classic,
    /// Ships keep a one-cell gap; row and column are entered on one line.
    Spaced,
}

/// How an interactive player types a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStyle {
    /// Two prompts, one integer each.
    SeparatePrompts,
    /// One line holding `row col`.
    SingleLine,
}

/// Characters used to draw each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: char,
    pub ship: char,
    pub hit: char,
    pub miss: char,
    pub destroyed: char,
}

pub const CLASSIC_GLYPHS: Glyphs = Glyphs {
    empty: '.',
    ship: 'S',
    hit: 'H',
    miss: 'M',
    destroyed: 'X',
};

pub const SPACED_GLYPHS: Glyphs = Glyphs {
    empty: ' ',
    ship: '\u{25a0}',
    hit: '\u{25a1}',
    miss: '\u{2022}',
    destroyed: 'X',
};

/// Everything that differs between the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub variant: Variant,
    pub fleet: &'static [ShipType],
    /// Ships must be surrounded by a ring of empty cells.
    pub adjacency_buffer: bool,
    pub placement_attempts: usize,
    pub setup_restarts: usize,
    pub input: InputStyle,
    pub glyphs: Glyphs,
}

impl Rules {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Rules {
                variant,
                fleet: &CLASSIC_FLEET,
                adjacency_buffer: false,
                placement_attempts: PLACEMENT_ATTEMPTS,
                setup_restarts: SETUP_RESTARTS,
                input: InputStyle::SeparatePrompts,
                glyphs: CLASSIC_GLYPHS,
            },
            Variant::Spaced => Rules {
                variant,
                fleet: &SPACED_FLEET,
                adjacency_buffer: true,
                placement_attempts: PLACEMENT_ATTEMPTS,
                setup_restarts: SETUP_RESTARTS,
                input: InputStyle::SingleLine,
                glyphs: SPACED_GLYPHS,
            },
        }
    }

    /// Total number of ship cells in the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(|s| s.length()).sum()
    }
}
