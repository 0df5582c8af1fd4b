//! In-place rotation by quarter turns
//!
//! Each concentric ring is rotated on its own as a cyclic shift of its
//! four sides. One side is saved, the side that feeds it is copied over
//! it, then the side feeding that one, and so on; the saved values land on
//! the last side visited. A half turn pairs opposite sides, so it takes two
//! such cycles starting from adjacent sides.

use sqmx_core::{Angle, Axis, Ordinal, Result, Rotation, SIDE_COUNT};
use tracing::debug;

use crate::matrix::Matrix;
use crate::segment::Segment;

impl<T: Ordinal> Matrix<T> {
    /// Rotate the matrix in place by `angle` in the sense of `rotation`
    ///
    /// A zero angle leaves the matrix untouched. The centre cell of an odd
    /// dimension never moves.
    pub fn rotate(&mut self, rotation: Rotation, angle: Angle) -> Result<()> {
        let n = self.dimension;
        debug!(dimension = n, ?rotation, %angle, rings = n / 2, "rotating");
        if angle == Angle::Deg0 {
            return Ok(());
        }
        let feeding = angle.opposite();

        for depth in 0..n / 2 {
            let mut initial = Segment::ring(n, Axis::Row, depth, depth)?;
            let mut turns = SIDE_COUNT - 1;
            loop {
                let snapshot = self.view(initial).save();
                let mut destination = initial;
                while turns > 0 {
                    let source = destination.next_segment(rotation, feeding, depth)?;
                    if source == initial {
                        break;
                    }
                    self.view_mut(destination).copy_from(&source)?;
                    destination = source;
                    turns -= 1;
                }
                self.view_mut(destination).restore(&snapshot)?;

                turns = turns.saturating_sub(1);
                if turns == 0 {
                    break;
                }
                initial = initial.next_segment(rotation.opposite(), Angle::Deg90, depth)?;
            }
        }
        Ok(())
    }

    /// Rotate by a signed number of quarter turns, positive meaning
    /// clockwise
    pub fn rotate_quarter_turns(&mut self, turns: i64) -> Result<()> {
        let rotation = if turns < 0 {
            Rotation::Counterclockwise
        } else {
            Rotation::Clockwise
        };
        let angle = Angle::from_quarter_turns((turns.unsigned_abs() % 4) as i64);
        self.rotate(rotation, angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]], |x| x).unwrap()
    }

    fn counting(n: usize) -> Matrix<i64> {
        Matrix::from_fn(n, |p| (p.row() * n + p.column()) as i64).unwrap()
    }

    /// Rotation computed cell by cell
    fn turned_clockwise(m: &Matrix<i64>) -> Matrix<i64> {
        let n = m.dimension();
        Matrix::from_fn(n, |p| *m.get(n - 1 - p.column(), p.row()).unwrap()).unwrap()
    }

    #[test]
    fn test_rotate_clockwise_quarter() {
        let mut m = sample();
        m.rotate(Rotation::Clockwise, Angle::Deg90).unwrap();
        assert_eq!(m.to_rows(), vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn test_rotate_counterclockwise_quarter() {
        let mut m = sample();
        m.rotate(Rotation::Counterclockwise, Angle::Deg90).unwrap();
        assert_eq!(m.to_rows(), vec![vec![3, 6, 9], vec![2, 5, 8], vec![1, 4, 7]]);
    }

    #[test]
    fn test_rotate_half_turn() {
        let mut m = sample();
        m.rotate(Rotation::Clockwise, Angle::Deg180).unwrap();
        assert_eq!(m.to_rows(), vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]]);
    }

    #[test]
    fn test_three_quarters_equal_one_back() {
        let mut a = counting(5);
        let mut b = counting(5);
        a.rotate(Rotation::Clockwise, Angle::Deg270).unwrap();
        b.rotate(Rotation::Counterclockwise, Angle::Deg90).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_matches_cellwise_rotation() {
        for n in 1..=6 {
            let original = counting(n);
            let mut m = original.clone();
            m.rotate(Rotation::Clockwise, Angle::Deg90).unwrap();
            assert_eq!(m, turned_clockwise(&original), "dimension {n}");
        }
    }

    #[test]
    fn test_zero_angle_is_noop() {
        let mut m = counting(4);
        m.rotate(Rotation::Counterclockwise, Angle::Deg0).unwrap();
        assert_eq!(m, counting(4));
    }

    #[test]
    fn test_signed_quarter_turns() {
        let mut a = counting(4);
        let mut b = counting(4);
        a.rotate_quarter_turns(-1).unwrap();
        b.rotate(Rotation::Counterclockwise, Angle::Deg90).unwrap();
        assert_eq!(a, b);

        a.rotate_quarter_turns(5).unwrap();
        assert_eq!(a, counting(4));
        a.rotate_quarter_turns(i64::MIN).unwrap();
        assert_eq!(a, counting(4));
    }
}
