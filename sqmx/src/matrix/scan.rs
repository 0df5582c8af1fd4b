//! Read-only queries over rows and columns

use std::cmp::Ordering;

use hashbrown::HashSet;
use sqmx_core::{Axis, Ordinal};

use super::Matrix;
use crate::position::Position;
use crate::segment::Segment;

impl<T: Ordinal> Matrix<T> {
    /// Largest sum of absolute values over the rows (`Axis::Row`) or the
    /// columns
    pub fn norm(&self, axis: Axis) -> T {
        self.lines(axis)
            .map(|line| self.view(line).sum_by(T::abs))
            .reduce(|norm, sum| norm.max(&sum))
            .unwrap_or_else(T::zero)
    }

    /// For every row holding a positive cell, the sum of the cells strictly
    /// between its first two positive cells
    ///
    /// With no second positive cell the range runs to the end of the row.
    /// Rows without positive cells, and rows where the range is empty,
    /// contribute nothing.
    pub fn sums_between_positives(&self) -> Vec<T> {
        let n = self.dimension;
        let mut sums = Vec::new();
        for row in self.rows() {
            let view = self.view(row);
            let mut positives = view
                .values()
                .enumerate()
                .filter(|(_, value)| value.positive())
                .map(|(column, _)| column);
            let Some(first) = positives.next() else {
                continue;
            };
            let second = positives.next().unwrap_or(n);
            if first + 1 < second {
                let between = Segment::span_unchecked(n, Axis::Row, row.index(), first + 1, second);
                sums.push(self.view(between).sum());
            }
        }
        sums
    }

    /// Longest run of strictly increasing (or, with `ascending == false`,
    /// strictly decreasing) neighbours along any row or column
    ///
    /// The first run found wins ties. A run needs at least two cells; a
    /// matrix without any such pair reports the empty segment `[0, 0)` of
    /// line 0.
    pub fn largest_monotone_block(&self, axis: Axis, ascending: bool) -> Segment {
        let n = self.dimension;
        let wanted = if ascending {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        let mut block = Segment::span_unchecked(n, axis, 0, 0, 0);
        for line in self.lines(axis) {
            let values: Vec<&T> = self.view(line).values().collect();
            let mut start = 0;
            while start < n {
                let mut end = start + 1;
                while end < n && values[end - 1].compare(values[end]) == wanted {
                    end += 1;
                }
                if end - start > block.len().max(1) {
                    block = Segment::span_unchecked(n, axis, line.index(), start, end);
                }
                start = end;
            }
        }
        block
    }

    /// Every cell holding a value equal to `value`
    pub fn positions_equal_to(&self, value: &T) -> HashSet<Position> {
        self.positions()
            .filter(|&position| self[position] == *value)
            .collect()
    }
}
