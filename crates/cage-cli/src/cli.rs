//! CLI argument definitions for the cage partition tool.

use std::path::PathBuf;

use cage_model::{DEFAULT_MAX_VALUE, PartitionQuery, RangeQuery};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cage-partitions",
    version,
    about = "Killer Sudoku cage partitions - list the digit combinations for a sum",
    long_about = "List every way to write a cage sum as a fixed number of digits.\n\n\
                  Partitions are printed largest digit first, in descending order, and can be\n\
                  split into repeat-free combinations and those that repeat a digit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the partitions of one sum into a fixed number of parts.
    Generate(GenerateArgs),

    /// Render the partition report for ranges of sums and part counts.
    Table(TableArgs),

    /// Print partition counts per sum and part count.
    Summary(RangeArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Total to partition.
    #[arg(value_name = "SUM", allow_negative_numbers = true)]
    pub sum: i32,

    /// Number of parts.
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub count: i32,

    /// Largest allowed part.
    #[arg(long = "max-value", value_name = "N", default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: i32,

    /// List repeat-free partitions apart from those that repeat a digit.
    #[arg(long = "split-repeats")]
    pub split_repeats: bool,

    /// Print JSON instead of the text report.
    #[arg(long = "json")]
    pub json: bool,
}

impl GenerateArgs {
    pub fn query(&self) -> PartitionQuery {
        PartitionQuery::new(self.sum, self.count).with_max_value(self.max_value)
    }
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// List repeat-free partitions apart from those that repeat a digit.
    #[arg(long = "split-repeats")]
    pub split_repeats: bool,

    /// Write the report to a file instead of stdout (existing contents are replaced).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct RangeArgs {
    /// Smallest sum (first paragraph).
    #[arg(long = "min-sum", default_value_t = RangeQuery::default().min_sum, allow_negative_numbers = true)]
    pub min_sum: i32,

    /// Largest sum (last paragraph).
    #[arg(long = "max-sum", default_value_t = RangeQuery::default().max_sum, allow_negative_numbers = true)]
    pub max_sum: i32,

    /// Fewest parts per partition.
    #[arg(long = "min-count", default_value_t = RangeQuery::default().min_count, allow_negative_numbers = true)]
    pub min_count: i32,

    /// Most parts per partition.
    #[arg(long = "max-count", default_value_t = RangeQuery::default().max_count, allow_negative_numbers = true)]
    pub max_count: i32,

    /// Largest allowed part.
    #[arg(long = "max-value", value_name = "N", default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: i32,
}

impl RangeArgs {
    pub fn query(&self) -> RangeQuery {
        RangeQuery::new(self.min_sum, self.max_sum, self.min_count, self.max_count)
            .with_max_value(self.max_value)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
