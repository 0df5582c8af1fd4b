//! Index and range validation for square matrix addressing
//!
//! Pure checks with no storage access. Every function reports the first
//! violated bound instead of clamping.

use crate::MatrixError;

/// Validate that `index` lies in the half-open range `[lower, upper)`
pub const fn check_index(
    name: &'static str,
    index: usize,
    lower: usize,
    upper: usize,
) -> Result<(), MatrixError> {
    if index < lower || index >= upper {
        return Err(MatrixError::IndexOutOfBounds {
            name,
            index,
            lower,
            upper,
        });
    }
    Ok(())
}

/// Validate a matrix dimension
pub const fn check_dimension(dimension: usize) -> Result<(), MatrixError> {
    if dimension < 1 {
        return Err(MatrixError::InvalidDimension { dimension });
    }
    Ok(())
}

/// Validate `0 <= start <= finish <= dimension`
pub const fn check_range(start: usize, finish: usize, dimension: usize) -> Result<(), MatrixError> {
    if finish > dimension {
        return Err(MatrixError::IndexOutOfBounds {
            name: "segment finish",
            index: finish,
            lower: 0,
            upper: dimension + 1,
        });
    }
    if start > finish {
        return Err(MatrixError::IndexOutOfBounds {
            name: "segment start",
            index: start,
            lower: 0,
            upper: finish + 1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(check_index("row", 0, 0, 3), Ok(()));
        assert_eq!(check_index("row", 2, 0, 3), Ok(()));
        assert_eq!(
            check_index("row", 3, 0, 3),
            Err(MatrixError::IndexOutOfBounds {
                name: "row",
                index: 3,
                lower: 0,
                upper: 3
            })
        );
    }

    #[test]
    fn test_check_dimension() {
        assert_eq!(check_dimension(1), Ok(()));
        assert_eq!(
            check_dimension(0),
            Err(MatrixError::InvalidDimension { dimension: 0 })
        );
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(0, 3, 3), Ok(()));
        // empty ranges are valid
        assert_eq!(check_range(2, 2, 3), Ok(()));
        assert!(check_range(0, 4, 3).is_err());
        assert!(check_range(3, 2, 3).is_err());
    }
}
