//! Directional, bounded views over one row or column
//!
//! A [`Segment`] is only a descriptor: axis, line index and the half-open
//! range `[start, finish)` along that line. It never copies cells. Reading
//! or writing goes through [`SegmentView`] and [`SegmentViewMut`], which
//! borrow the owning [`Matrix`] for the duration of one operation, so two
//! segments of the same matrix can take part in one copy or swap.
//!
//! Ring segments (the sides of the `depth`-th concentric square) iterate
//! clockwise around the ring: the upper and right sides ascend, the lower
//! and left sides descend. Every other segment iterates in natural order.

use std::fmt;
use std::ops::Range;

use sqmx_core::{
    check_index, check_range, Angle, Axis, MatrixError, Ordinal, QuickSorter, Quadrant, Result,
    Rotation,
};

use crate::matrix::Matrix;
use crate::position::Position;
use crate::sequence::SegmentSequence;

/// Descriptor of a bounded run of cells along one row or column
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    axis: Axis,
    index: usize,
    start: usize,
    finish: usize,
    ring: bool,
    dimension: usize,
}

impl Segment {
    /// The whole row or column at `index`
    pub fn line(dimension: usize, axis: Axis, index: usize) -> Result<Self> {
        Self::range(dimension, axis, index, 0, dimension)
    }

    /// Cells `[start, finish)` of the row or column at `index`
    pub fn range(
        dimension: usize,
        axis: Axis,
        index: usize,
        start: usize,
        finish: usize,
    ) -> Result<Self> {
        check_index("row/column", index, 0, dimension)?;
        check_range(start, finish, dimension)?;
        Ok(Self::span_unchecked(dimension, axis, index, start, finish))
    }

    /// Callers guarantee `index < dimension` and `start <= finish <= dimension`
    pub(crate) const fn span_unchecked(
        dimension: usize,
        axis: Axis,
        index: usize,
        start: usize,
        finish: usize,
    ) -> Self {
        Self {
            axis,
            index,
            start,
            finish,
            ring: false,
            dimension,
        }
    }

    /// The part of the row or column at `index` that forms one side of the
    /// `depth`-th ring, excluding the corner the next side starts from
    pub fn ring(dimension: usize, axis: Axis, index: usize, depth: usize) -> Result<Self> {
        check_index("row/column", index, 0, dimension)?;
        check_index("depth", depth, 0, dimension / 2)?;
        let mut segment = Self {
            axis,
            index,
            start: 0,
            finish: 0,
            ring: true,
            dimension,
        };
        if segment.is_ascending() {
            segment.start = depth;
            segment.finish = dimension - 1 - depth;
        } else {
            segment.start = depth + 1;
            segment.finish = dimension - depth;
        }
        Ok(segment)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn finish(&self) -> usize {
        self.finish
    }

    pub fn is_ring(&self) -> bool {
        self.ring
    }

    /// Dimension of the matrix this segment was built for
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.finish - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.finish
    }

    /// Side of the square this line lies on
    pub fn quadrant(&self) -> Quadrant {
        let first_half = self.index < self.dimension / 2;
        match (self.axis, first_half) {
            (Axis::Row, true) => Quadrant::Up,
            (Axis::Row, false) => Quadrant::Down,
            (Axis::Column, true) => Quadrant::Left,
            (Axis::Column, false) => Quadrant::Right,
        }
    }

    /// Whether iteration runs toward higher indices
    pub fn is_ascending(&self) -> bool {
        !self.ring || matches!(self.quadrant(), Quadrant::Up | Quadrant::Right)
    }

    /// Indices along the line in iteration order
    pub fn steps(&self) -> Steps {
        Steps {
            range: self.start..self.finish,
            ascending: self.is_ascending(),
        }
    }

    /// Position of the cell at index `k` along the line
    pub fn position_at(&self, k: usize) -> Position {
        debug_assert!(k < self.dimension);
        match self.axis {
            Axis::Row => Position::new_unchecked(self.index, k),
            Axis::Column => Position::new_unchecked(k, self.index),
        }
    }

    /// Positions of the segment's cells in iteration order
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        let segment = *self;
        self.steps().map(move |k| segment.position_at(k))
    }

    pub(crate) fn offset_at(&self, k: usize) -> usize {
        match self.axis {
            Axis::Row => self.index * self.dimension + k,
            Axis::Column => k * self.dimension + self.index,
        }
    }

    /// Ring segment whose cells move onto this one when the matrix turns
    /// by `angle` in `rotation`
    ///
    /// An odd angle flips the axis and, when the turn carries the line
    /// across the anti-diagonal, mirrors its index; the angle then drops by
    /// one quarter. A remaining half turn mirrors the index across the
    /// centre.
    pub fn next_segment(&self, rotation: Rotation, angle: Angle, depth: usize) -> Result<Self> {
        let last = self.dimension - 1;
        let mut angle = angle;
        let mut index = self.index;
        let axis = if angle.is_odd() {
            self.axis.opposite()
        } else {
            self.axis
        };

        if angle.is_odd() {
            if matches!(
                (self.axis, rotation),
                (Axis::Row, Rotation::Clockwise) | (Axis::Column, Rotation::Counterclockwise)
            ) {
                index = last - index;
            }
            angle = angle.previous();
        }
        debug_assert!(!angle.is_odd());

        if angle > Angle::Deg0 {
            index = last - index;
        }

        Self::ring(self.dimension, axis, index, depth)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.axis == other.axis
            && self.index == other.index
            && self.start == other.start
            && self.finish == other.finish
    }
}

impl Eq for Segment {}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{},{})",
            self.axis, self.index, self.start, self.finish
        )
    }
}

/// Direction-aware walk over a segment's indices
#[derive(Debug, Clone)]
pub struct Steps {
    range: Range<usize>,
    ascending: bool,
}

impl Iterator for Steps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.ascending {
            self.range.next()
        } else {
            self.range.next_back()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Steps {
    fn next_back(&mut self) -> Option<usize> {
        if self.ascending {
            self.range.next_back()
        } else {
            self.range.next()
        }
    }
}

impl ExactSizeIterator for Steps {}

/// Shared view of a segment's cells
pub struct SegmentView<'a, T> {
    pub(crate) matrix: &'a Matrix<T>,
    pub(crate) segment: Segment,
}

impl<T> Clone for SegmentView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SegmentView<'_, T> {}

impl<'a, T: Ordinal> SegmentView<'a, T> {
    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn len(&self) -> usize {
        self.segment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Cell values in iteration order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &'a T> + ExactSizeIterator + 'a {
        let matrix = self.matrix;
        let segment = self.segment;
        segment
            .steps()
            .map(move |k| &matrix.data[segment.offset_at(k)])
    }

    pub fn sum(&self) -> T {
        self.sum_by(T::clone)
    }

    /// Sum of `op` applied to every cell
    pub fn sum_by<F>(&self, op: F) -> T
    where
        F: Fn(&T) -> T,
    {
        self.values()
            .fold(T::zero(), |accum, value| accum.add(&op(value)))
    }

    /// Sum divided by length using the value type's division
    pub fn average(&self) -> Result<T> {
        if self.is_empty() {
            return Err(MatrixError::EmptySegment);
        }
        Ok(self.sum().divide_by(self.len() as i64))
    }

    /// Snapshot of the values in iteration order
    pub fn save(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

impl<T: Ordinal> fmt::Display for SegmentView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Mutable view of a segment's cells
pub struct SegmentViewMut<'a, T> {
    pub(crate) matrix: &'a mut Matrix<T>,
    pub(crate) segment: Segment,
}

impl<T: Ordinal> SegmentViewMut<'_, T> {
    pub fn as_view(&self) -> SegmentView<'_, T> {
        SegmentView {
            matrix: &*self.matrix,
            segment: self.segment,
        }
    }

    /// Write a snapshot back in iteration order
    ///
    /// The snapshot may be shorter than the segment; trailing cells keep
    /// their values.
    pub fn restore(&mut self, values: &[T]) -> Result<()> {
        if values.len() > self.segment.len() {
            return Err(MatrixError::SnapshotTooLong {
                capacity: self.segment.len(),
                found: values.len(),
            });
        }
        for (k, value) in self.segment.steps().zip(values) {
            self.matrix.data[self.segment.offset_at(k)] = value.clone();
        }
        Ok(())
    }

    /// Assign every cell from `source`, each side walking in its own
    /// iteration order
    pub fn copy_from(&mut self, source: &Segment) -> Result<()> {
        self.check_same_length(source)?;
        for (dst, src) in self.segment.steps().zip(source.steps()) {
            let value = self.matrix.data[source.offset_at(src)].clone();
            self.matrix.data[self.segment.offset_at(dst)] = value;
        }
        Ok(())
    }

    /// Exchange cells element-wise with `other`
    pub fn swap_with(&mut self, other: &Segment) -> Result<()> {
        self.check_same_length(other)?;
        for (a, b) in self.segment.steps().zip(other.steps()) {
            self.matrix
                .data
                .swap(self.segment.offset_at(a), other.offset_at(b));
        }
        Ok(())
    }

    /// Quicksort the segment's cells in natural index order
    pub fn sort_by<C>(&mut self, comparator: C)
    where
        C: Fn(&T, &T) -> std::cmp::Ordering,
    {
        let mut sequence = SegmentSequence::new(&mut *self.matrix, self.segment);
        QuickSorter::new(comparator).sort(&mut sequence);
    }

    /// Replace every cell by `op` of its value
    pub fn map_in_place<F>(&mut self, mut op: F)
    where
        F: FnMut(&T) -> T,
    {
        for k in self.segment.steps() {
            let offset = self.segment.offset_at(k);
            self.matrix.data[offset] = op(&self.matrix.data[offset]);
        }
    }

    fn check_same_length(&self, other: &Segment) -> Result<()> {
        if other.len() != self.segment.len() {
            return Err(MatrixError::LengthMismatch {
                expected: self.segment.len(),
                found: other.len(),
            });
        }
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Borrow a segment for reading
    ///
    /// # Panics
    ///
    /// If `segment` was built for a different dimension.
    pub fn view(&self, segment: Segment) -> SegmentView<'_, T> {
        assert_eq!(
            segment.dimension, self.dimension,
            "segment built for dimension {} used on matrix of dimension {}",
            segment.dimension, self.dimension
        );
        SegmentView {
            matrix: self,
            segment,
        }
    }

    /// Borrow a segment for writing
    ///
    /// # Panics
    ///
    /// If `segment` was built for a different dimension.
    pub fn view_mut(&mut self, segment: Segment) -> SegmentViewMut<'_, T> {
        assert_eq!(
            segment.dimension, self.dimension,
            "segment built for dimension {} used on matrix of dimension {}",
            segment.dimension, self.dimension
        );
        SegmentViewMut {
            matrix: self,
            segment,
        }
    }

    /// Whole row or column at `index`
    pub fn segment(&self, axis: Axis, index: usize) -> Result<Segment> {
        Segment::line(self.dimension, axis, index)
    }

    /// Cells `[start, finish)` of the row or column at `index`
    pub fn segment_range(
        &self,
        axis: Axis,
        index: usize,
        start: usize,
        finish: usize,
    ) -> Result<Segment> {
        Segment::range(self.dimension, axis, index, start, finish)
    }

    /// One side of the `depth`-th rotation ring
    pub fn ring_segment(&self, axis: Axis, index: usize, depth: usize) -> Result<Segment> {
        Segment::ring(self.dimension, axis, index, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]], |x| x).unwrap()
    }

    #[test]
    fn test_segment_bounds_fail_fast() {
        assert!(Segment::line(3, Axis::Row, 3).is_err());
        assert!(Segment::range(3, Axis::Row, 0, 2, 4).is_err());
        assert!(Segment::range(3, Axis::Row, 0, 2, 1).is_err());
        assert!(Segment::ring(3, Axis::Row, 0, 1).is_err());
        assert!(Segment::range(3, Axis::Column, 1, 1, 1).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "used on matrix of dimension 2")]
    fn test_view_rejects_foreign_segment() {
        let segment = Segment::line(3, Axis::Row, 0).unwrap();
        let m = Matrix::filled(2, 0i64).unwrap();
        let _ = m.view(segment);
    }

    #[test]
    #[should_panic(expected = "segment built for dimension 2")]
    fn test_view_mut_rejects_foreign_segment() {
        let segment = Segment::line(2, Axis::Column, 1).unwrap();
        let mut m = Matrix::filled(4, 0i64).unwrap();
        let _ = m.view_mut(segment);
    }

    #[test]
    fn test_ring_segments_walk_clockwise() {
        let m = sample();
        let top = m.ring_segment(Axis::Row, 0, 0).unwrap();
        let right = m.ring_segment(Axis::Column, 2, 0).unwrap();
        let bottom = m.ring_segment(Axis::Row, 2, 0).unwrap();
        let left = m.ring_segment(Axis::Column, 0, 0).unwrap();

        assert_eq!(top.quadrant(), Quadrant::Up);
        assert_eq!(right.quadrant(), Quadrant::Right);
        assert_eq!(bottom.quadrant(), Quadrant::Down);
        assert_eq!(left.quadrant(), Quadrant::Left);

        assert_eq!(m.view(top).save(), vec![1, 2]);
        assert_eq!(m.view(right).save(), vec![3, 6]);
        assert_eq!(m.view(bottom).save(), vec![9, 8]);
        assert_eq!(m.view(left).save(), vec![7, 4]);
    }

    #[test]
    fn test_plain_segments_ignore_quadrant() {
        let m = sample();
        let bottom = m.segment(Axis::Row, 2).unwrap();
        assert!(bottom.is_ascending());
        assert_eq!(m.view(bottom).save(), vec![7, 8, 9]);
    }

    #[test]
    fn test_equality_uses_four_fields() {
        let ring = Segment::ring(4, Axis::Row, 0, 0).unwrap();
        let plain = Segment::range(4, Axis::Row, 0, 0, 3).unwrap();
        assert_eq!(ring, plain);
        assert_ne!(ring, Segment::range(4, Axis::Column, 0, 0, 3).unwrap());
    }

    #[test]
    fn test_sum_average_and_transform() {
        let m = sample();
        let row = m.view(m.segment(Axis::Row, 1).unwrap());
        assert_eq!(row.sum(), 15);
        assert_eq!(row.average().unwrap(), 5);
        assert_eq!(row.to_string(), "[4,5,6]");

        let m = Matrix::from_rows(&[[-1, 2], [3, -4]], |x| x).unwrap();
        let column = m.view(m.segment(Axis::Column, 1).unwrap());
        assert_eq!(column.sum(), -2);
        assert_eq!(column.sum_by(|v: &i64| v.abs()), 6);
        // truncating division
        assert_eq!(column.average().unwrap(), -1);
    }

    #[test]
    fn test_average_of_empty_segment() {
        let m = sample();
        let empty = m.segment_range(Axis::Row, 0, 1, 1).unwrap();
        assert_eq!(m.view(empty).sum(), 0);
        assert_eq!(m.view(empty).average(), Err(MatrixError::EmptySegment));
    }

    #[test]
    fn test_save_and_restore() {
        let mut m = sample();
        let row = m.segment(Axis::Row, 0).unwrap();
        let snapshot = m.view(row).save();

        m.view_mut(row).restore(&[0, 0]).unwrap();
        assert_eq!(m.view(row).save(), vec![0, 0, 3]);

        m.view_mut(row).restore(&snapshot).unwrap();
        assert_eq!(m.view(row).save(), vec![1, 2, 3]);

        assert_eq!(
            m.view_mut(row).restore(&[1, 2, 3, 4]),
            Err(MatrixError::SnapshotTooLong {
                capacity: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_copy_is_direction_aware() {
        let mut m = sample();
        let top = m.ring_segment(Axis::Row, 0, 0).unwrap();
        let left = m.ring_segment(Axis::Column, 0, 0).unwrap();
        m.view_mut(top).copy_from(&left).unwrap();
        assert_eq!(m.view(m.segment(Axis::Row, 0).unwrap()).save(), vec![7, 4, 3]);
    }

    #[test]
    fn test_copy_and_swap_require_equal_length() {
        let mut m = sample();
        let row = m.segment(Axis::Row, 0).unwrap();
        let short = m.segment_range(Axis::Row, 1, 0, 2).unwrap();
        assert_eq!(
            m.view_mut(row).copy_from(&short),
            Err(MatrixError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert!(m.view_mut(row).swap_with(&short).is_err());
    }

    #[test]
    fn test_swap_rows() {
        let mut m = sample();
        let first = m.segment(Axis::Row, 0).unwrap();
        let last = m.segment(Axis::Row, 2).unwrap();
        m.view_mut(first).swap_with(&last).unwrap();
        assert_eq!(m.view(first).save(), vec![7, 8, 9]);
        assert_eq!(m.view(last).save(), vec![1, 2, 3]);
    }

    #[test]
    fn test_next_segment_geometry() {
        let top = Segment::ring(3, Axis::Row, 0, 0).unwrap();
        // clockwise quarter turn: the top row is fed by the left column
        let source = top
            .next_segment(Rotation::Clockwise, Angle::Deg270, 0)
            .unwrap();
        assert_eq!((source.axis(), source.index()), (Axis::Column, 0));
        // half turn: the top row is fed by the bottom row
        let source = top
            .next_segment(Rotation::Clockwise, Angle::Deg180, 0)
            .unwrap();
        assert_eq!((source.axis(), source.index()), (Axis::Row, 2));
    }
}
