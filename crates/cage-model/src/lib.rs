//! Data model for Killer Sudoku cage partitions.

pub mod classification;
pub mod error;
pub mod partition;
pub mod query;
pub mod table;

pub use classification::Classification;
pub use error::{CageError, Result};
pub use partition::{Partition, PartitionSet};
pub use query::{DEFAULT_MAX_VALUE, PartitionQuery, RangeQuery};
pub use table::{PartitionTable, TableRow};
