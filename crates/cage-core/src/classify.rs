use cage_model::{Classification, Partition, PartitionSet};

/// Split partitions into repeat-free and repeated-digit groups, keeping order.
pub fn classify(partitions: &PartitionSet) -> Classification {
    let (unique, repeated): (Vec<Partition>, Vec<Partition>) = partitions
        .iter()
        .cloned()
        .partition(Partition::is_repeat_free);
    Classification {
        unique: PartitionSet::new(unique),
        repeated: PartitionSet::new(repeated),
    }
}
