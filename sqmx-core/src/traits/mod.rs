//! Abstract interfaces for the SQMX engines
//!
//! Traits are pure interfaces; concrete matrix-backed implementations live
//! in the `sqmx` crate.

pub mod ordinal;
pub mod sequence;

pub use ordinal::Ordinal;
pub use sequence::{Cursor, Sequence, SkippingCursor};
