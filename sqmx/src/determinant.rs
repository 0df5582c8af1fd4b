//! Determinant by cofactor expansion
//!
//! Both variants expand along successive rows, choosing one free column
//! per row. The sign of each term alternates with the chosen column's
//! rank among the columns still free, not with its absolute index.
//! [`Matrix::determinant`] walks the same tree of column choices as
//! [`Matrix::determinant_recursive`] with an explicit per-row state, so
//! its stack use does not grow with the dimension.

use sqmx_core::{BitSet, Ordinal};
use tracing::trace;

use crate::matrix::Matrix;

/// Explicit stack for the iterative expansion
struct Traversal<'a, T> {
    matrix: &'a Matrix<T>,
    /// Signed sum accumulated so far at each row
    totals: Vec<T>,
    /// Terms already folded into each row's total
    position: Vec<usize>,
    /// Column currently chosen (or next to try) at each row
    selected: Vec<usize>,
    occupied: BitSet,
    line: usize,
}

impl<'a, T: Ordinal> Traversal<'a, T> {
    fn new(matrix: &'a Matrix<T>) -> Self {
        let n = matrix.dimension;
        Self {
            matrix,
            totals: vec![T::zero(); n],
            position: vec![0; n],
            selected: vec![0; n],
            occupied: BitSet::new(n),
            line: 0,
        }
    }

    fn cell(&self, row: usize, column: usize) -> &T {
        &self.matrix.data[row * self.matrix.dimension + column]
    }

    fn is_first_line(&self) -> bool {
        self.line == 0
    }

    fn is_last_line(&self) -> bool {
        self.line + 1 == self.matrix.dimension
    }

    fn next_free_column(&self) -> Option<usize> {
        self.occupied.next_clear(self.selected[self.line])
    }

    /// Step to the next candidate column; `false` once the row is exhausted
    fn advance_column(&mut self) -> bool {
        self.selected[self.line] += 1;
        self.selected[self.line] < self.matrix.dimension
    }

    /// Occupy `column` at the current row and start a fresh row below
    fn descend(&mut self, column: usize) {
        self.selected[self.line] = column;
        self.occupied.insert(column);
        self.line += 1;
        self.selected[self.line] = 0;
        self.totals[self.line] = T::zero();
        self.position[self.line] = 0;
    }

    /// Return to the row above, fold the finished minor into its total and
    /// release its column
    fn ascend(&mut self) {
        self.line -= 1;
        let line = self.line;
        let column = self.selected[line];
        self.occupied.remove(column);
        let term = self.cell(line, column).multiply(&self.totals[line + 1]);
        self.totals[line] = if self.position[line] % 2 == 0 {
            self.totals[line].add(&term)
        } else {
            self.totals[line].subtract(&term)
        };
        self.position[line] += 1;
    }

    fn run(mut self) -> T {
        let mut up = false;
        let mut steps = 0usize;
        loop {
            steps += 1;
            if up {
                if self.is_first_line() {
                    break;
                }
                self.ascend();
                if self.advance_column() {
                    up = false;
                }
            } else {
                match self.next_free_column() {
                    Some(column) if self.is_last_line() => {
                        self.totals[self.line] = self.cell(self.line, column).clone();
                        up = true;
                    }
                    Some(column) => self.descend(column),
                    None => up = true,
                }
            }
        }
        trace!(dimension = self.matrix.dimension, steps, "iterative determinant finished");
        self.totals.swap_remove(0)
    }
}

impl<T: Ordinal> Matrix<T> {
    /// Determinant by recursive Laplace expansion
    pub fn determinant_recursive(&self) -> T {
        trace!(dimension = self.dimension, "recursive determinant");
        let mut free = vec![true; self.dimension];
        self.expand(0, &mut free)
    }

    fn expand(&self, row: usize, free: &mut [bool]) -> T {
        let n = self.dimension;
        if row + 1 == n {
            let column = free.iter().position(|&f| f).unwrap_or(0);
            return self.data[row * n + column].clone();
        }

        let mut accum = T::zero();
        let mut position = 0;
        for column in 0..n {
            if !free[column] {
                continue;
            }
            free[column] = false;
            let minor = self.expand(row + 1, free);
            free[column] = true;

            let term = self.data[row * n + column].multiply(&minor);
            accum = if position % 2 == 0 {
                accum.add(&term)
            } else {
                accum.subtract(&term)
            };
            position += 1;
        }
        accum
    }

    /// Determinant by the same expansion driven by an explicit
    /// descend/ascend loop instead of recursion
    pub fn determinant(&self) -> T {
        Traversal::new(self).run()
    }
}
