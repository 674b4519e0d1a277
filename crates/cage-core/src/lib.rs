//! Partition generation for Killer Sudoku cages.
//!
//! - [`generate`] lists every descending partition of a sum into a fixed
//!   number of bounded parts.
//! - [`classify`] separates repeat-free partitions from those with repeats.
//! - [`generate_range`] tabulates partitions over ranges of sums and counts.

pub mod classify;
pub mod generator;
pub mod range;

pub use classify::classify;
pub use generator::{PartitionSearch, generate, generate_query, partitions};
pub use range::{generate_range, generate_range_query};
