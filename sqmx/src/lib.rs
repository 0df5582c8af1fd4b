//! SQMX - Square Matrix Addressing and Transformation Engine
//!
//! This library provides an owned square matrix whose rows, columns and
//! diagonals can be addressed, iterated and mutated in place through light
//! views, with in-place rotation, two determinant engines and generic
//! sorting built on top.
//!
//! ## Architecture
//!
//! SQMX follows a definition/implementation separation:
//!
//! - **sqmx-core**: Value contract, geometry, validation, the `Sequence`
//!   abstraction and the sorters (no storage)
//! - **sqmx**: Matrix storage, positions, segment views, sequence adapters
//!   and the rotation, determinant and extremum engines
//!
//! ## Quick Start
//!
//! ```rust
//! use sqmx::{Angle, Axis, Matrix, Rotation};
//!
//! fn example() -> sqmx::Result<()> {
//!     let mut matrix = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]], |x| x)?;
//!     assert_eq!(matrix.determinant(), 0);
//!
//!     matrix.rotate(Rotation::Clockwise, Angle::Deg90)?;
//!     let top = matrix.segment(Axis::Row, 0)?;
//!     assert_eq!(matrix.view(top).save(), vec![7, 4, 1]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Segment views**: Direction-aware row/column ranges with sum, average,
//!   snapshot, copy and swap
//! - **Rotation**: Ring-by-ring quarter turns with one side of scratch space
//! - **Determinants**: Recursive and explicit-stack cofactor expansion
//! - **Sorting**: Quicksort and selection sorters over any `Sequence`
//! - **serde** (default): Serialize a matrix as dimension plus row-major data
//! - **rand** (default): Random fill

// Re-export core abstractions
pub use sqmx_core::{
    // Core traits
    Ordinal, Sequence,
    // Geometry
    Angle, Axis, Direction, Quadrant, Rotation, SIDE_COUNT,
    // Sorters
    QuickSorter, SelectionSorter,
    // Error handling
    ErrorCategory, MatrixError, Result,
    // Validation utilities
    check_dimension, check_index, check_range,
};

// Implementation modules
pub mod determinant;
pub mod extremum;
pub mod matrix;
pub mod position;
pub mod rotation;
pub mod segment;
pub mod sequence;

// Public exports
pub use extremum::Extremums;
pub use matrix::Matrix;
pub use position::Position;
pub use segment::{Segment, SegmentView, SegmentViewMut, Steps};
pub use sequence::{DiagonalSequence, FnSequence, LineSequence, SegmentSequence};
