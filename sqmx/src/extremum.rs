//! Extremum, local extremum and saddle-point scans
//!
//! Searches collect a set of positions rather than a single winner, so tied
//! values are all reported.

use std::cmp::Ordering;

use hashbrown::HashSet;
use sqmx_core::{Axis, MatrixError, Ordinal, Result};

use crate::matrix::Matrix;
use crate::position::Position;
use crate::segment::SegmentView;

/// Running best value and every position holding it
#[derive(Debug, Clone)]
pub struct Extremums<T> {
    maximum: bool,
    best: Option<T>,
    positions: HashSet<Position>,
}

impl<T: Ordinal> Extremums<T> {
    /// Empty accumulator for maximums (`maximum == true`) or minimums
    pub fn new(maximum: bool) -> Self {
        Self {
            maximum,
            best: None,
            positions: HashSet::new(),
        }
    }

    /// Account for `value` found at `position`
    ///
    /// A strictly better value restarts the set, an equal one joins it.
    pub fn offer(&mut self, position: Position, value: &T) {
        let better = if self.maximum {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        let ordering = match &self.best {
            None => better,
            Some(best) => value.compare(best),
        };
        if ordering == better {
            self.best = Some(value.clone());
            self.positions.clear();
            self.positions.insert(position);
        } else if ordering == Ordering::Equal {
            self.positions.insert(position);
        }
    }

    /// Best value seen so far
    pub fn value(&self) -> Option<&T> {
        self.best.as_ref()
    }

    pub fn positions(&self) -> &HashSet<Position> {
        &self.positions
    }

    pub fn into_positions(self) -> HashSet<Position> {
        self.positions
    }
}

impl<T: Ordinal> SegmentView<'_, T> {
    /// Feed every cell of the segment into `extremums`
    pub fn accumulate_extremums(&self, extremums: &mut Extremums<T>) {
        for (position, value) in self.segment.positions().zip(self.values()) {
            extremums.offer(position, value);
        }
    }

    /// Positions of the largest (or smallest) value in the segment
    pub fn extremums(&self, maximum: bool) -> Result<HashSet<Position>> {
        if self.is_empty() {
            return Err(MatrixError::EmptySegment);
        }
        let mut extremums = Extremums::new(maximum);
        self.accumulate_extremums(&mut extremums);
        Ok(extremums.into_positions())
    }
}

impl<T: Ordinal> Matrix<T> {
    /// Positions of the largest (or smallest) value in the whole matrix
    pub fn extremums(&self, maximum: bool) -> HashSet<Position> {
        let mut extremums = Extremums::new(maximum);
        for row in self.rows() {
            self.view(row).accumulate_extremums(&mut extremums);
        }
        extremums.into_positions()
    }

    /// Union of every row's (or column's) own extremum positions
    pub fn line_extremums(&self, axis: Axis, maximum: bool) -> HashSet<Position> {
        let mut union = HashSet::new();
        for line in self.lines(axis) {
            let mut extremums = Extremums::new(maximum);
            self.view(line).accumulate_extremums(&mut extremums);
            union.extend(extremums.into_positions());
        }
        union
    }

    /// Cells that are a minimum of their row and a maximum of their column
    pub fn saddle_points(&self) -> HashSet<Position> {
        let minimums = self.line_extremums(Axis::Row, false);
        let maximums = self.line_extremums(Axis::Column, true);
        minimums.intersection(&maximums).copied().collect()
    }

    /// Cells that are a maximum of their row and a minimum of their column
    pub fn saddle_points_symmetric(&self) -> HashSet<Position> {
        let maximums = self.line_extremums(Axis::Row, true);
        let minimums = self.line_extremums(Axis::Column, false);
        maximums.intersection(&minimums).copied().collect()
    }

    /// Whether the cell is strictly greater (or smaller) than each of its
    /// up to eight neighbours
    ///
    /// # Panics
    ///
    /// If `position` lies outside this matrix.
    pub fn is_local_extremum(&self, position: Position, maximum: bool) -> bool {
        let n = self.dimension;
        let value = &self[position];
        let wanted = if maximum {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        let rows = position.row().saturating_sub(1)..=(position.row() + 1).min(n - 1);
        rows.flat_map(|row| {
            let columns = position.column().saturating_sub(1)..=(position.column() + 1).min(n - 1);
            columns.map(move |column| Position::new_unchecked(row, column))
        })
        .filter(|&neighbour| neighbour != position)
        .all(|neighbour| value.compare(&self[neighbour]) == wanted)
    }

    /// Every local maximum (or minimum)
    pub fn local_extremums(&self, maximum: bool) -> HashSet<Position> {
        self.positions()
            .filter(|&position| self.is_local_extremum(position, maximum))
            .collect()
    }

    /// Local extremums ordered by ascending value, equal values by position
    pub fn sorted_local_extremums(&self, maximum: bool) -> Vec<Position> {
        let mut sorted: Vec<Position> = self.local_extremums(maximum).into_iter().collect();
        sorted.sort_by(|a, b| self[*a].compare(&self[*b]).then_with(|| a.cmp(b)));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(m: &Matrix<i64>, cells: &[(usize, usize)]) -> HashSet<Position> {
        cells
            .iter()
            .map(|&(r, c)| m.position(r, c).unwrap())
            .collect()
    }

    #[test]
    fn test_global_extremums_keep_ties() {
        let m = Matrix::from_rows(&[[1, 9], [9, 2]], |x| x).unwrap();
        assert_eq!(m.extremums(true), set(&m, &[(0, 1), (1, 0)]));
        assert_eq!(m.extremums(false), set(&m, &[(0, 0)]));
    }

    #[test]
    fn test_accumulator_restarts_on_better_value() {
        let m = Matrix::from_rows(&[[3, 3, 1], [0, 5, 5], [5, 2, 2]], |x| x).unwrap();
        let mut extremums = Extremums::new(true);
        m.view(m.segment(Axis::Row, 0).unwrap())
            .accumulate_extremums(&mut extremums);
        assert_eq!(extremums.value(), Some(&3));
        assert_eq!(extremums.positions().len(), 2);

        m.view(m.segment(Axis::Row, 1).unwrap())
            .accumulate_extremums(&mut extremums);
        assert_eq!(extremums.value(), Some(&5));
        assert_eq!(extremums.positions(), &set(&m, &[(1, 1), (1, 2)]));
    }

    #[test]
    fn test_segment_extremums() {
        let m = Matrix::from_rows(&[[4, -1, 4], [0, 0, 0], [1, 2, 3]], |x| x).unwrap();
        let row = m.view(m.segment(Axis::Row, 0).unwrap());
        assert_eq!(row.extremums(true).unwrap(), set(&m, &[(0, 0), (0, 2)]));
        assert_eq!(row.extremums(false).unwrap(), set(&m, &[(0, 1)]));

        let empty = m.view(m.segment_range(Axis::Column, 0, 2, 2).unwrap());
        assert_eq!(empty.extremums(true), Err(MatrixError::EmptySegment));
    }

    #[test]
    fn test_line_extremums() {
        let m = Matrix::from_rows(&[[1, 2], [4, 3]], |x| x).unwrap();
        assert_eq!(m.line_extremums(Axis::Row, true), set(&m, &[(0, 1), (1, 0)]));
        assert_eq!(m.line_extremums(Axis::Column, false), set(&m, &[(0, 0), (0, 1)]));
    }

    #[test]
    fn test_saddle_points() {
        // 3 is the smallest of row 1 and the largest of column 0
        let m = Matrix::from_rows(&[[1, 8, 9], [3, 4, 5], [2, 0, 7]], |x| x).unwrap();
        assert_eq!(m.saddle_points(), set(&m, &[(1, 0)]));

        let none = Matrix::from_rows(&[[1, 2], [2, 1]], |x| x).unwrap();
        assert!(none.saddle_points().is_empty());
    }

    #[test]
    fn test_symmetric_saddle_points() {
        // 5 is the largest of row 1 and the smallest of column 2
        let m = Matrix::from_rows(&[[1, 8, 9], [3, 4, 5], [2, 0, 7]], |x| x).unwrap();
        assert_eq!(m.saddle_points_symmetric(), set(&m, &[(1, 2)]));
    }

    #[test]
    fn test_local_extremums() {
        let m = Matrix::from_rows(&[[9, 1, 7], [2, 3, 2], [8, 1, 6]], |x| x).unwrap();
        assert!(m.is_local_extremum(m.position(0, 0).unwrap(), true));
        assert!(!m.is_local_extremum(m.position(1, 1).unwrap(), true));
        assert_eq!(m.local_extremums(true), set(&m, &[(0, 0), (0, 2), (2, 0), (2, 2)]));
        assert_eq!(m.local_extremums(false), set(&m, &[(0, 1), (2, 1)]));
        // equal neighbours disqualify each other
        assert!(Matrix::filled(2, 3i64).unwrap().local_extremums(true).is_empty());
        assert_eq!(
            m.sorted_local_extremums(true),
            vec![
                m.position(2, 2).unwrap(),
                m.position(0, 2).unwrap(),
                m.position(2, 0).unwrap(),
                m.position(0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_single_cell_is_local_extremum() {
        let m = Matrix::filled(1, 0i64).unwrap();
        let origin = m.position(0, 0).unwrap();
        assert!(m.is_local_extremum(origin, true));
        assert!(m.is_local_extremum(origin, false));
    }
}
