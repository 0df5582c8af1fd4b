#![no_std]

//! SQMX Core - Square Matrix Addressing Definitions
//!
//! This crate provides the value contract, geometry, validation helpers,
//! the sequence abstraction and the sorters that the `sqmx` matrix engine
//! is built on. Nothing here owns matrix storage.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod bitset;
pub mod error;
pub mod geometry;
pub mod sort;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub use bitset::BitSet;
pub use error::*;
pub use geometry::*;
pub use sort::{QuickSorter, SelectionSorter};
pub use traits::*;
pub use validation::{check_dimension, check_index, check_range};
