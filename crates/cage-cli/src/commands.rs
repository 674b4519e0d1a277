use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use cage_core::{classify, generate_query, generate_range, generate_range_query};
use cage_report::{ReportOptions, ReportTarget, format_table, write_report};

use crate::cli::{GenerateArgs, RangeArgs, TableArgs};
use crate::summary::build_summary_table;

/// Outcome of the `table` command.
#[derive(Debug)]
pub struct TableResult {
    pub output: Option<PathBuf>,
    pub sums: usize,
    pub partitions: usize,
}

/// Render the partitions of a single sum, as text or JSON.
pub fn run_generate(args: &GenerateArgs) -> Result<String> {
    let query = args.query();
    let span = info_span!(
        "generate",
        sum = query.sum,
        count = query.count,
        max_value = query.max_value
    );
    let _guard = span.enter();

    if args.json {
        let partitions = generate_query(&query);
        info!(partitions = partitions.len(), "generated partitions");
        let json = if args.split_repeats {
            serde_json::to_string_pretty(&classify(&partitions))
        } else {
            serde_json::to_string_pretty(&partitions)
        };
        return json.context("serialize partitions");
    }

    // A one-cell table renders with the same layout as the full report.
    let table = generate_range(query.sum, query.sum, query.count, query.count, query.max_value);
    if table.total_partitions() == 0 {
        warn!("no partitions match the request");
    }
    info!(partitions = table.total_partitions(), "generated partitions");
    let options = ReportOptions::default().with_split_repeats(args.split_repeats);
    let report = format_table(&table, &options);
    Ok(report.trim_end_matches('\n').to_string())
}

/// Build the partition report for a range and send it to stdout or a file.
pub fn run_table(args: &TableArgs) -> Result<TableResult> {
    let query = args.range.query();
    let span = info_span!(
        "table",
        min_sum = query.min_sum,
        max_sum = query.max_sum,
        min_count = query.min_count,
        max_count = query.max_count
    );
    let _guard = span.enter();

    let table = generate_range_query(&query);
    if table.rows() == 0 || table.columns() == 0 {
        warn!("range is empty; the report has no partitions");
    }
    let options = ReportOptions::default().with_split_repeats(args.split_repeats);
    let report = format_table(&table, &options);
    let target = ReportTarget::from_path(args.output.clone());
    write_report(&report, &target).context("write partition report")?;
    info!(
        sums = table.rows(),
        partitions = table.total_partitions(),
        "partition report complete"
    );
    Ok(TableResult {
        output: args.output.clone(),
        sums: table.rows(),
        partitions: table.total_partitions(),
    })
}

/// Tabulate partition counts for a range.
pub fn run_summary(args: &RangeArgs) -> Table {
    let query = args.query();
    let _guard = info_span!("summary", max_value = query.max_value).entered();
    let partitions = generate_range_query(&query);
    info!(
        partitions = partitions.total_partitions(),
        "summarized partition table"
    );
    build_summary_table(&partitions)
}
