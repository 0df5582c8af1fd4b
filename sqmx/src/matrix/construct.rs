//! Ways to build a matrix

use std::collections::BTreeSet;

use sqmx_core::{check_dimension, check_index, MatrixError, Ordinal, Result};
use tracing::debug;

use super::Matrix;
use crate::position::Position;
use crate::segment::SegmentView;

impl<T> Matrix<T> {
    /// Fill every cell with `generator(position)`, row by row
    pub fn from_fn<F>(dimension: usize, mut generator: F) -> Result<Self>
    where
        F: FnMut(Position) -> T,
    {
        check_dimension(dimension)?;
        let data = (0..dimension * dimension)
            .map(|offset| {
                generator(Position::new_unchecked(offset / dimension, offset % dimension))
            })
            .collect();
        Ok(Self { dimension, data })
    }

    /// Every cell set to a copy of `value`
    pub fn filled(dimension: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        check_dimension(dimension)?;
        Ok(Self {
            dimension,
            data: vec![value; dimension * dimension],
        })
    }

    /// Build from a literal table of raw integers mapped through
    /// `initializer`
    ///
    /// The row count sets the dimension; every row must have that many
    /// entries.
    pub fn from_rows<R, F>(rows: &[R], initializer: F) -> Result<Self>
    where
        R: AsRef<[i64]>,
        F: Fn(i64) -> T,
    {
        let dimension = rows.len();
        check_dimension(dimension)?;
        let mut data = Vec::with_capacity(dimension * dimension);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != dimension {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: dimension,
                    found: line.len(),
                });
            }
            data.extend(line.iter().map(|&value| initializer(value)));
        }
        Ok(Self { dimension, data })
    }

    /// Copy with the rows and columns of the given positions struck out
    ///
    /// Positions whose row or column is already struck are skipped, so the
    /// result stays square, and at most `dimension - 1` lines of each axis
    /// are removed.
    pub fn without_positions<I>(&self, positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
        T: Clone,
    {
        let mut rows = BTreeSet::new();
        let mut columns = BTreeSet::new();
        let mut budget = self.dimension - 1;
        for position in positions {
            check_index("row", position.row(), 0, self.dimension)?;
            check_index("column", position.column(), 0, self.dimension)?;
            if rows.contains(&position.row()) || columns.contains(&position.column()) {
                continue;
            }
            if budget == 0 {
                break;
            }
            budget -= 1;
            rows.insert(position.row());
            columns.insert(position.column());
        }

        let dimension = self.dimension - rows.len();
        debug!(
            from = self.dimension,
            to = dimension,
            rows = ?rows,
            columns = ?columns,
            "striking out lines"
        );
        let data = self
            .positions()
            .filter(|p| !rows.contains(&p.row()) && !columns.contains(&p.column()))
            .map(|p| self.data[self.offset(p)].clone())
            .collect();
        Ok(Self { dimension, data })
    }
}

impl<T: Ordinal> Matrix<T> {
    /// Copy where each cell becomes `combine(cell, fold(row))`
    ///
    /// `fold` sees the original row, before any of its cells change.
    pub fn with_row_fold<F, C>(&self, fold: F, combine: C) -> Self
    where
        F: Fn(&SegmentView<'_, T>) -> T,
        C: Fn(&T, &T) -> T,
    {
        let mut result = self.clone();
        for row in self.rows() {
            let folded = fold(&self.view(row));
            result.view_mut(row).map_in_place(|cell| combine(cell, &folded));
        }
        result
    }

    /// Matrix with values drawn uniformly from `[-dimension, dimension]`
    #[cfg(feature = "rand")]
    pub fn random<R>(dimension: usize, rng: &mut R) -> Result<Self>
    where
        R: rand::Rng + ?Sized,
    {
        let bound = dimension as i64;
        Self::from_fn(dimension, |_| T::from_i64(rng.gen_range(-bound..=bound)))
    }
}
