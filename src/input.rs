//! Parsing of typed coordinates.

use core::fmt;

/// Why a line of input was not accepted as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotANumber,
    /// Parsed, but not in `0..size`.
    OutOfRange { value: usize, size: usize },
    /// Expected `row col`, got this many fields.
    WrongArity(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber => write!(f, "Invalid input. Please enter numbers only."),
            InputError::OutOfRange { size, .. } => write!(
                f,
                "Invalid input. Coordinates must be between 0 and {}.",
                size - 1
            ),
            InputError::WrongArity(_) => {
                write!(f, "Invalid input. Please enter valid coordinates (e.g., 0 0).")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one index in `0..size`, ignoring surrounding whitespace.
pub fn parse_index(input: &str, size: usize) -> Result<usize, InputError> {
    let value: usize = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if value >= size {
        return Err(InputError::OutOfRange { value, size });
    }
    Ok(value)
}

/// Parse `row col` separated by whitespace, both in `0..size`.
pub fn parse_pair(input: &str, size: usize) -> Result<(usize, usize), InputError> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    match fields.as_slice() {
        [row, col] => Ok((parse_index(row, size)?, parse_index(col, size)?)),
        other => Err(InputError::WrongArity(other.len())),
    }
}
