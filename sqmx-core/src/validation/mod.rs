//! Bound validation utilities for SQMX addressing
//!
//! This module contains pure validation functions with no storage access.

pub mod bounds;

pub use bounds::{check_dimension, check_index, check_range};
