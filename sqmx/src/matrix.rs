//! Square matrix storage and cell access
//!
//! [`Matrix`] owns a flat row-major buffer of `N×N` values. All other views
//! ([`Position`], [`Segment`], the [`crate::sequence`] adapters) are plain
//! coordinates or short-lived borrows of this buffer.

mod construct;
mod scan;
mod transform;

use std::fmt;
use std::ops::{Index, IndexMut};

use sqmx_core::{check_index, Axis, Result};

use crate::position::Position;
use crate::segment::Segment;

/// Square matrix of `dimension × dimension` values
///
/// The dimension is fixed at construction and is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) dimension: usize,
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Value at `(row, column)`, or `None` outside the matrix
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.dimension || column >= self.dimension {
            return None;
        }
        self.data.get(row * self.dimension + column)
    }

    /// Overwrite the value at `(row, column)`
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let position = self.position(row, column)?;
        self[position] = value;
        Ok(())
    }

    /// Validated coordinates of one cell
    pub fn position(&self, row: usize, column: usize) -> Result<Position> {
        Position::new(row, column, self.dimension)
    }

    /// Row-major backing storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy of the values as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.data
            .chunks(self.dimension)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Whole rows or columns in index order
    pub fn lines(
        &self,
        axis: Axis,
    ) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator {
        let dimension = self.dimension;
        (0..dimension)
            .map(move |index| Segment::span_unchecked(dimension, axis, index, 0, dimension))
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator {
        self.lines(Axis::Row)
    }

    pub fn columns(&self) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator {
        self.lines(Axis::Column)
    }

    /// Every cell position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let dimension = self.dimension;
        (0..dimension * dimension)
            .map(move |offset| Position::new_unchecked(offset / dimension, offset % dimension))
    }

    pub(crate) fn offset(&self, position: Position) -> usize {
        position.row() * self.dimension + position.column()
    }

    fn check_position(&self, position: Position) {
        assert!(
            check_index("row", position.row(), 0, self.dimension).is_ok()
                && check_index("column", position.column(), 0, self.dimension).is_ok(),
            "position {position} outside matrix of dimension {}",
            self.dimension
        );
    }
}

impl<T> Index<Position> for Matrix<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        self.check_position(position);
        &self.data[self.offset(position)]
    }
}

impl<T> IndexMut<Position> for Matrix<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        self.check_position(position);
        let offset = self.offset(position);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in self.data.chunks(self.dimension) {
            for (column, value) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, ",")?;
                }
                // width applies to the rendered text, not the value type
                write!(f, "{:>10}", value.to_string())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, SerializeStruct, Serializer};
    use sqmx_core::{check_dimension, MatrixError};

    use super::Matrix;

    impl<T: Serialize> Serialize for Matrix<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Matrix", 2)?;
            state.serialize_field("dimension", &self.dimension)?;
            state.serialize_field("data", &self.data)?;
            state.end()
        }
    }

    #[derive(serde::Deserialize)]
    struct RawMatrix<T> {
        dimension: usize,
        data: Vec<T>,
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawMatrix::<T>::deserialize(deserializer)?;
            check_dimension(raw.dimension).map_err(D::Error::custom)?;
            let expected = raw.dimension * raw.dimension;
            if raw.data.len() != expected {
                return Err(D::Error::custom(MatrixError::LengthMismatch {
                    expected,
                    found: raw.data.len(),
                }));
            }
            Ok(Matrix {
                dimension: raw.dimension,
                data: raw.data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqmx_core::MatrixError;

    #[test]
    fn test_get_and_set() {
        let mut m = Matrix::filled(2, 0i64).unwrap();
        m.set(1, 0, 7).unwrap();
        assert_eq!(m.get(1, 0), Some(&7));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert!(matches!(
            m.set(0, 2, 1),
            Err(MatrixError::IndexOutOfBounds { name: "column", .. })
        ));
    }

    #[test]
    fn test_index_by_position() {
        let mut m = Matrix::from_rows(&[[1, 2], [3, 4]], |x| x).unwrap();
        let p = m.position(0, 1).unwrap();
        assert_eq!(m[p], 2);
        m[p] = 20;
        assert_eq!(m.as_slice(), &[1, 20, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "outside matrix")]
    fn test_foreign_position_panics() {
        let big = Matrix::filled(3, 0i64).unwrap();
        let small = Matrix::filled(2, 0i64).unwrap();
        let p = big.position(2, 2).unwrap();
        let _ = small[p];
    }

    #[test]
    fn test_lines_cover_axis() {
        let m = Matrix::filled(3, 1i64).unwrap();
        let rows: Vec<Segment> = m.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|s| s.axis() == Axis::Row && s.len() == 3));
        assert_eq!(m.columns().last().map(|s| s.index()), Some(2));
        assert_eq!(m.positions().count(), 9);
    }

    #[test]
    fn test_display_right_aligns() {
        let m = Matrix::from_rows(&[[1, -20], [300, 4]], |x| x).unwrap();
        let expected = format!(
            "{{\n{:>10},{:>10}\n{:>10},{:>10}\n}}",
            1, -20, 300, 4
        );
        assert_eq!(m.to_string(), expected);
    }

    #[test]
    fn test_structural_equality() {
        let a = Matrix::from_rows(&[[1, 2], [3, 4]], |x| x).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(1, 1, 5).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, Matrix::filled(3, 1i64).unwrap());
    }
}
