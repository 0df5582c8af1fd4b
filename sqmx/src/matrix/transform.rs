//! In-place reshaping and sorting of whole lines

use std::cmp::Ordering;

use sqmx_core::{check_index, Axis, Direction, Ordinal, QuickSorter, Result, Sequence};
use tracing::debug;

use super::Matrix;
use crate::position::Position;
use crate::sequence::{DiagonalSequence, FnSequence, LineSequence};

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl<T> Matrix<T> {
    /// Mirror the matrix across its main diagonal
    pub fn transpose(&mut self) {
        let n = self.dimension;
        for row in 0..n {
            for column in row + 1..n {
                self.data.swap(row * n + column, column * n + row);
            }
        }
    }

    /// Swap the rows of `a` and `b`, then their columns
    pub fn swap_lines(&mut self, a: Position, b: Position) -> Result<()>
    where
        T: Clone,
    {
        for position in [a, b] {
            check_index("row", position.row(), 0, self.dimension)?;
            check_index("column", position.column(), 0, self.dimension)?;
        }
        LineSequence::new(self, Axis::Column, 0)?.swap(a.row(), b.row());
        LineSequence::new(self, Axis::Row, 0)?.swap(a.column(), b.column());
        Ok(())
    }

    /// Replace every cell by `op` of its value
    pub fn map_in_place<F>(&mut self, mut op: F)
    where
        F: FnMut(&T) -> T,
    {
        for cell in self.data.iter_mut() {
            *cell = op(cell);
        }
    }

    /// Quicksort through caller-supplied key lookup and swap closures
    ///
    /// The closures see the whole matrix, so `swap` may move any cells it
    /// likes; `size` is the number of logical slots.
    pub fn sort_by_fns<V, C, K, S>(&mut self, comparator: C, size: usize, key: K, swap: S)
    where
        C: Fn(&V, &V) -> Ordering,
        K: Fn(&Matrix<T>, usize) -> V,
        S: FnMut(&mut Matrix<T>, usize, usize),
    {
        QuickSorter::new(comparator).sort(&mut FnSequence::new(self, size, key, swap));
    }

    /// Sort all cells along the broken diagonals, without changing which
    /// cells form a diagonal
    pub fn sort_diagonals<C>(&mut self, comparator: C)
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering,
    {
        QuickSorter::new(comparator).sort(&mut DiagonalSequence::new(self));
    }

    /// Cyclically move every row (`Axis::Row`) or column by `step` places
    ///
    /// `RightDown` moves lines toward higher indices, `LeftUp` toward lower.
    /// Each cycle of the permutation is followed once with a single cached
    /// line.
    pub fn shift(&mut self, axis: Axis, direction: Direction, step: usize)
    where
        T: Clone,
    {
        let n = self.dimension;
        let step = step % n;
        debug!(?axis, ?direction, step, dimension = n, "shifting lines");
        if step == 0 {
            return;
        }
        let source_of = |destination: usize| match direction {
            Direction::RightDown => (destination + n - step) % n,
            Direction::LeftUp => (destination + step) % n,
        };

        for start in 0..gcd(n, step) {
            let cache = self.line(axis, start);
            let mut destination = start;
            loop {
                let source = source_of(destination);
                if source == start {
                    break;
                }
                self.copy_line(axis, destination, source);
                destination = source;
            }
            self.set_line(axis, destination, cache);
        }
    }

    fn line(&self, axis: Axis, index: usize) -> Vec<T>
    where
        T: Clone,
    {
        let n = self.dimension;
        match axis {
            Axis::Row => self.data[index * n..(index + 1) * n].to_vec(),
            Axis::Column => (0..n).map(|k| self.data[k * n + index].clone()).collect(),
        }
    }

    fn copy_line(&mut self, axis: Axis, destination: usize, source: usize)
    where
        T: Clone,
    {
        let n = self.dimension;
        for k in 0..n {
            let (to, from) = match axis {
                Axis::Row => (destination * n + k, source * n + k),
                Axis::Column => (k * n + destination, k * n + source),
            };
            self.data[to] = self.data[from].clone();
        }
    }

    fn set_line(&mut self, axis: Axis, index: usize, values: Vec<T>) {
        let n = self.dimension;
        for (k, value) in values.into_iter().enumerate() {
            let offset = match axis {
                Axis::Row => index * n + k,
                Axis::Column => k * n + index,
            };
            self.data[offset] = value;
        }
    }
}

impl<T: Ordinal> Matrix<T> {
    /// Stable sort of whole columns by the keys in row `index`
    /// (`Axis::Row`), or of whole rows by the keys in column `index`
    pub fn sort_by_line(&mut self, axis: Axis, index: usize) -> Result<()> {
        check_index("row/column", index, 0, self.dimension)?;
        debug!(?axis, index, dimension = self.dimension, "stable line sort");
        let n = self.dimension;
        let key = |slot: usize| match axis {
            Axis::Row => &self.data[index * n + slot],
            Axis::Column => &self.data[slot * n + index],
        };
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| key(a).compare(key(b)));

        let data = (0..n * n)
            .map(|offset| {
                let (row, column) = (offset / n, offset % n);
                match axis {
                    Axis::Row => self.data[row * n + order[column]].clone(),
                    Axis::Column => self.data[order[row] * n + column].clone(),
                }
            })
            .collect();
        self.data = data;
        Ok(())
    }

    /// Quicksort variant of [`Matrix::sort_by_line`]; not stable
    pub fn quick_sort_by_line(&mut self, axis: Axis, index: usize) -> Result<()> {
        debug!(?axis, index, dimension = self.dimension, "quick line sort");
        let mut sequence = LineSequence::new(self, axis, index)?;
        QuickSorter::new(T::compare).sort(&mut sequence);
        Ok(())
    }

    /// Quicksort the cells of every row independently
    pub fn sort_rows<C>(&mut self, comparator: C)
    where
        C: Fn(&T, &T) -> Ordering,
    {
        for row in self.rows() {
            self.view_mut(row).sort_by(&comparator);
        }
    }
}
