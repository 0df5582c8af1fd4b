//! Error types for SQMX operations

/// Broad classification of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A matrix, position or segment could not be built
    Construction,
    /// An operation was called with arguments outside its contract
    Precondition,
}

/// Errors that can occur during SQMX operations
///
/// Every variant is a programmer error reported synchronously at the
/// offending call. Nothing here is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Matrix dimension must be at least 1
    InvalidDimension { dimension: usize },
    /// A literal row has a different length than the number of rows
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Index outside the half-open range `[lower, upper)`
    IndexOutOfBounds {
        name: &'static str,
        index: usize,
        lower: usize,
        upper: usize,
    },
    /// Two segments that must be the same length are not
    LengthMismatch { expected: usize, found: usize },
    /// A snapshot does not fit into the target segment
    SnapshotTooLong { capacity: usize, found: usize },
    /// Sequence to sort or search has no elements
    EmptySequence,
    /// Segment to search has no elements
    EmptySegment,
    /// Number of elements to select must be 1 or greater
    InvalidLimit,
}

impl MatrixError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::InvalidDimension { .. }
            | MatrixError::RaggedRows { .. }
            | MatrixError::IndexOutOfBounds { .. } => ErrorCategory::Construction,
            MatrixError::LengthMismatch { .. }
            | MatrixError::SnapshotTooLong { .. }
            | MatrixError::EmptySequence
            | MatrixError::EmptySegment
            | MatrixError::InvalidLimit => ErrorCategory::Precondition,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimension { dimension } => write!(
                f,
                "wrong dimension {dimension}, it should be at least 1 or greater"
            ),
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} elements, every row must have {expected}"
            ),
            MatrixError::IndexOutOfBounds {
                name,
                index,
                lower,
                upper,
            } => write!(f, "index of {name} ({index}) must be within [{lower},{upper})"),
            MatrixError::LengthMismatch { expected, found } => write!(
                f,
                "segment length {found} does not match expected length {expected}"
            ),
            MatrixError::SnapshotTooLong { capacity, found } => write!(
                f,
                "snapshot of {found} values does not fit into segment of length {capacity}"
            ),
            MatrixError::EmptySequence => {
                write!(f, "sequence should contain at least one element")
            }
            MatrixError::EmptySegment => write!(f, "segment should contain at least one element"),
            MatrixError::InvalidLimit => {
                write!(f, "number of elements to sort should be 1 or greater")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for SQMX operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            MatrixError::InvalidDimension { dimension: 0 }.category(),
            ErrorCategory::Construction
        );
        assert_eq!(MatrixError::EmptySequence.category(), ErrorCategory::Precondition);
        assert_eq!(
            MatrixError::SnapshotTooLong {
                capacity: 2,
                found: 3
            }
            .category(),
            ErrorCategory::Precondition
        );
    }
}
