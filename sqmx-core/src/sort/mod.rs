//! Storage-agnostic sorters
//!
//! Both engines reach the data only through [`crate::Sequence`].

pub mod quick;
pub mod selection;

pub use quick::QuickSorter;
pub use selection::SelectionSorter;
