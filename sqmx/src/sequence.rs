//! [`Sequence`] adapters over a matrix
//!
//! Each adapter borrows the matrix mutably for one sort and translates a
//! logical slot index into cells. None of them copies storage.

use sqmx_core::{check_index, Axis, Result, Sequence};

use crate::matrix::Matrix;
use crate::segment::Segment;

/// Cells of one segment, slot `i` being the cell at `start + i`
pub struct SegmentSequence<'a, T> {
    matrix: &'a mut Matrix<T>,
    segment: Segment,
}

impl<'a, T> SegmentSequence<'a, T> {
    pub fn new(matrix: &'a mut Matrix<T>, segment: Segment) -> Self {
        Self { matrix, segment }
    }

    fn offset(&self, slot: usize) -> usize {
        self.segment.offset_at(self.segment.start() + slot)
    }
}

impl<T: Clone> Sequence for SegmentSequence<'_, T> {
    type Key = T;

    fn size(&self) -> usize {
        self.segment.len()
    }

    fn key(&self, index: usize) -> T {
        self.matrix.data[self.offset(index)].clone()
    }

    fn swap(&mut self, from: usize, to: usize) {
        let (from, to) = (self.offset(from), self.offset(to));
        self.matrix.data.swap(from, to);
    }
}

/// Whole lines keyed by one cross line
///
/// Keyed by row `r`, slot `i` is column `i` with key `m[r][i]`, and a swap
/// exchanges two entire columns. Keyed by column `c` the roles flip.
pub struct LineSequence<'a, T> {
    matrix: &'a mut Matrix<T>,
    axis: Axis,
    index: usize,
}

impl<'a, T> LineSequence<'a, T> {
    /// Lines keyed by the row (`Axis::Row`) or column at `index`
    pub fn new(matrix: &'a mut Matrix<T>, axis: Axis, index: usize) -> Result<Self> {
        check_index("row/column", index, 0, matrix.dimension)?;
        Ok(Self {
            matrix,
            axis,
            index,
        })
    }
}

impl<T: Clone> Sequence for LineSequence<'_, T> {
    type Key = T;

    fn size(&self) -> usize {
        self.matrix.dimension
    }

    fn key(&self, index: usize) -> T {
        let n = self.matrix.dimension;
        match self.axis {
            Axis::Row => self.matrix.data[self.index * n + index].clone(),
            Axis::Column => self.matrix.data[index * n + self.index].clone(),
        }
    }

    fn swap(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let n = self.matrix.dimension;
        match self.axis {
            Axis::Row => {
                for row in 0..n {
                    self.matrix.data.swap(row * n + from, row * n + to);
                }
            }
            Axis::Column => {
                for column in 0..n {
                    self.matrix.data.swap(from * n + column, to * n + column);
                }
            }
        }
    }
}

/// Every cell of the matrix, one broken diagonal after another
///
/// Diagonal `d` starts at `(d, 0)` and runs down-right, wrapping from the
/// bottom row back to row 0, so slot `i` with `d = i / n` and `r = i % n`
/// lands in column `r`.
pub struct DiagonalSequence<'a, T> {
    matrix: &'a mut Matrix<T>,
}

impl<'a, T> DiagonalSequence<'a, T> {
    pub fn new(matrix: &'a mut Matrix<T>) -> Self {
        Self { matrix }
    }

    fn offset(&self, index: usize) -> usize {
        let n = self.matrix.dimension;
        let (diagonal, column) = (index / n, index % n);
        let first = n - diagonal;
        let row = if column < first {
            diagonal + column
        } else {
            column - first
        };
        row * n + column
    }
}

impl<T: Clone> Sequence for DiagonalSequence<'_, T> {
    type Key = T;

    fn size(&self) -> usize {
        self.matrix.data.len()
    }

    fn key(&self, index: usize) -> T {
        self.matrix.data[self.offset(index)].clone()
    }

    fn swap(&mut self, from: usize, to: usize) {
        let (from, to) = (self.offset(from), self.offset(to));
        self.matrix.data.swap(from, to);
    }
}

/// Sequence whose key lookup and swap are caller-supplied closures over
/// the matrix
pub struct FnSequence<'a, T, K, S> {
    matrix: &'a mut Matrix<T>,
    size: usize,
    key: K,
    swap: S,
}

impl<'a, T, K, S> FnSequence<'a, T, K, S> {
    pub fn new(matrix: &'a mut Matrix<T>, size: usize, key: K, swap: S) -> Self {
        Self {
            matrix,
            size,
            key,
            swap,
        }
    }
}

impl<T, V, K, S> Sequence for FnSequence<'_, T, K, S>
where
    K: Fn(&Matrix<T>, usize) -> V,
    S: FnMut(&mut Matrix<T>, usize, usize),
{
    type Key = V;

    fn size(&self) -> usize {
        self.size
    }

    fn key(&self, index: usize) -> V {
        (self.key)(&*self.matrix, index)
    }

    fn swap(&mut self, from: usize, to: usize) {
        (self.swap)(&mut *self.matrix, from, to);
    }
}
