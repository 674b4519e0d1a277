//! Descending integer partitions with a bounded part count and part size.
//!
//! The search is a depth-first walk over candidate parts, largest first.
//! Each level caps its candidates at the part chosen by the level above, so
//! every emitted sequence is non-increasing and the overall output comes out
//! in descending lexicographic order. Frames live on a heap stack rather
//! than the call stack, so long partitions cannot overflow it.

use cage_model::{Partition, PartitionQuery, PartitionSet};
use tracing::trace;

/// Every way to write `sum` as `count` non-increasing parts in `1..=max_value`.
///
/// Non-positive `sum` or `count` yields an empty set, as does a
/// non-positive `max_value`.
pub fn generate(sum: i32, count: i32, max_value: i32) -> PartitionSet {
    let partitions: PartitionSet = partitions(sum, count, max_value).collect();
    trace!(
        sum,
        count,
        max_value,
        partitions = partitions.len(),
        "generated partitions"
    );
    partitions
}

pub fn generate_query(query: &PartitionQuery) -> PartitionSet {
    generate(query.sum, query.count, query.max_value)
}

/// Lazily yield the partitions [`generate`] would collect, in the same order.
pub fn partitions(sum: i32, count: i32, max_value: i32) -> PartitionSearch {
    if sum < 1 || count < 1 {
        return PartitionSearch::exhausted();
    }
    let (Ok(sum), Ok(count), Ok(cap)) = (
        u32::try_from(sum),
        u32::try_from(count),
        u32::try_from(max_value),
    ) else {
        return PartitionSearch::exhausted();
    };
    PartitionSearch {
        frames: vec![Frame::new(sum, count, cap)],
        prefix: Vec::new(),
    }
}

/// Iterator over partitions in descending lexicographic order.
#[derive(Debug, Clone)]
pub struct PartitionSearch {
    frames: Vec<Frame>,
    // Parts chosen by every frame except the innermost.
    prefix: Vec<u32>,
}

impl PartitionSearch {
    fn exhausted() -> Self {
        Self {
            frames: Vec::new(),
            prefix: Vec::new(),
        }
    }
}

impl Iterator for PartitionSearch {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.frames.last_mut() {
            if frame.next < frame.low {
                self.frames.pop();
                self.prefix.pop();
                continue;
            }
            let part = frame.next;
            frame.next -= 1;
            let remaining_sum = frame.remaining_sum - part;
            let remaining_count = frame.remaining_count - 1;
            self.prefix.push(part);
            if remaining_count == 0 {
                let partition = Partition::from_descending(self.prefix.clone());
                self.prefix.pop();
                return Some(partition);
            }
            self.frames.push(Frame::new(remaining_sum, remaining_count, part));
        }
        None
    }
}

/// Candidate parts for one position: `next` down to `low`, inclusive.
#[derive(Debug, Clone, Copy)]
struct Frame {
    remaining_sum: u32,
    remaining_count: u32,
    next: u32,
    low: u32,
}

impl Frame {
    /// Bounds prune parts that leave the remaining positions unsatisfiable:
    /// each later part is at least 1 and at most the part chosen here.
    fn new(remaining_sum: u32, remaining_count: u32, cap: u32) -> Self {
        let high = remaining_sum
            .checked_sub(remaining_count - 1)
            .map_or(0, |high| high.min(cap));
        let low = remaining_sum.div_ceil(remaining_count).max(1);
        Self {
            remaining_sum,
            remaining_count,
            next: high,
            low,
        }
    }
}
