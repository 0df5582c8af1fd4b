//! Validated cell coordinates
//!
//! A [`Position`] is a transient `(row, column)` pair checked against the
//! dimension of the matrix it was created for. Positions order row-major.

use sqmx_core::{check_index, Result};

/// Coordinates of one cell of a square matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Create a position inside a `dimension`×`dimension` matrix
    pub fn new(row: usize, column: usize, dimension: usize) -> Result<Self> {
        check_index("row", row, 0, dimension)?;
        check_index("column", column, 0, dimension)?;
        Ok(Self { row, column })
    }

    /// Callers guarantee both coordinates are in bounds
    pub(crate) const fn new_unchecked(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.row, self.column)
    }
}
