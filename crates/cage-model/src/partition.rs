//! Partitions and ordered partition sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CageError;

/// A non-increasing sequence of positive parts.
///
/// The sum and length are fixed when the partition is produced; there is no
/// way to mutate a partition afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Partition {
    parts: Vec<u32>,
}

impl Partition {
    /// Wrap parts that are already known to be positive and non-increasing.
    ///
    /// The partition generator is the intended caller. Use `TryFrom` for
    /// untrusted input.
    pub fn from_descending(parts: Vec<u32>) -> Self {
        debug_assert!(is_descending_positive(&parts), "parts: {parts:?}");
        Self { parts }
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn sum(&self) -> u64 {
        self.parts.iter().map(|&part| u64::from(part)).sum()
    }

    /// The first (and therefore largest) part.
    pub fn largest(&self) -> Option<u32> {
        self.parts.first().copied()
    }

    /// True when no part value appears more than once.
    pub fn is_repeat_free(&self) -> bool {
        // Equal values are adjacent in a non-increasing sequence.
        self.parts.windows(2).all(|pair| pair[0] != pair[1])
    }
}

impl TryFrom<Vec<u32>> for Partition {
    type Error = CageError;

    fn try_from(parts: Vec<u32>) -> Result<Self, Self::Error> {
        if is_descending_positive(&parts) {
            Ok(Self { parts })
        } else {
            Err(CageError::InvalidPartition(parts))
        }
    }
}

impl From<Partition> for Vec<u32> {
    fn from(partition: Partition) -> Self {
        partition.parts
    }
}

/// Renders as `(7,2,1)`.
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, part) in self.parts.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{part}")?;
        }
        f.write_str(")")
    }
}

fn is_descending_positive(parts: &[u32]) -> bool {
    parts.iter().all(|&part| part > 0) && parts.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Partitions for a single (sum, count, max value) triple, in descending
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionSet {
    partitions: Vec<Partition>,
}

impl PartitionSet {
    pub fn new(partitions: Vec<Partition>) -> Self {
        Self { partitions }
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    pub fn as_slice(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn first(&self) -> Option<&Partition> {
        self.partitions.first()
    }

    pub fn into_vec(self) -> Vec<Partition> {
        self.partitions
    }
}

impl FromIterator<Partition> for PartitionSet {
    fn from_iter<I: IntoIterator<Item = Partition>>(iter: I) -> Self {
        Self {
            partitions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PartitionSet {
    type Item = Partition;
    type IntoIter = std::vec::IntoIter<Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.into_iter()
    }
}

impl<'a> IntoIterator for &'a PartitionSet {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}
