//! Plain-text rendering of partition tables.
//!
//! One paragraph per sum, headed `=== n ===`. Each non-empty cell becomes a
//! `[m]: ` line listing its partitions as `(a,b,c)` joined by `", "`.
//! When repeats are split out, repeat-free partitions lead the line and
//! partitions with repeated digits follow on an indented continuation line.

use cage_core::classify;
use cage_model::{Partition, PartitionSet, PartitionTable};

/// Indent for the repeated-digit continuation line.
pub const CONTINUATION_INDENT: &str = "     ";

/// Placeholder when a cell has only repeated-digit partitions.
pub const NO_REPEAT_FREE: &str = "(no repeat-free)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// List repeat-free partitions apart from those with repeated digits.
    pub split_repeats: bool,
}

impl ReportOptions {
    #[must_use]
    pub fn with_split_repeats(mut self, enable: bool) -> Self {
        self.split_repeats = enable;
        self
    }
}

pub fn format_partition(partition: &Partition) -> String {
    partition.to_string()
}

pub fn format_partition_list(partitions: &[Partition]) -> String {
    partitions
        .iter()
        .map(format_partition)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one cell as a `[count]: ...` line, plus the continuation line when
/// repeats are split out.
pub fn format_cell(count: i32, cell: &PartitionSet, options: &ReportOptions) -> String {
    let mut out = format!("[{count}]: ");
    if !options.split_repeats {
        out.push_str(&format_partition_list(cell.as_slice()));
        return out;
    }
    let classification = classify(cell);
    let has_repeats = !classification.repeated.is_empty();
    if classification.unique.is_empty() {
        out.push_str(NO_REPEAT_FREE);
    } else {
        out.push_str(&format_partition_list(classification.unique.as_slice()));
        if has_repeats {
            out.push(',');
        }
    }
    if has_repeats {
        out.push('\n');
        out.push_str(CONTINUATION_INDENT);
        out.push_str(&format_partition_list(classification.repeated.as_slice()));
    }
    out
}

/// Render the whole table. The result always ends with a newline.
pub fn format_table(table: &PartitionTable, options: &ReportOptions) -> String {
    let mut out = String::new();
    for (index, row) in table.iter_rows().enumerate() {
        if index > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!("=== {} ===", row.sum));
        for (count, cell) in row.iter() {
            if cell.is_empty() {
                continue;
            }
            out.push('\n');
            out.push_str(&format_cell(count, cell, options));
        }
    }
    out.push('\n');
    out
}
