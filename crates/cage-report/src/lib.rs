//! Report generation for cage partition tables.
//!
//! - **Text**: paragraphs per sum, one line per part count, optionally with
//!   repeat-free partitions listed ahead of those with repeated digits
//! - **Output**: standard output or a truncated file

mod text;
mod writer;

pub use text::{
    CONTINUATION_INDENT, NO_REPEAT_FREE, ReportOptions, format_cell, format_partition,
    format_partition_list, format_table,
};
pub use writer::{ReportTarget, ReportWriter, write_report, write_report_with};
