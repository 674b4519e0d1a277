use serde::{Deserialize, Serialize};

use crate::partition::PartitionSet;

/// A partition set split into repeat-free and repeated-digit groups.
///
/// Both groups keep the relative order of the input set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub unique: PartitionSet,
    pub repeated: PartitionSet,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.unique.len() + self.repeated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty() && self.repeated.is_empty()
    }
}
