use serde::{Deserialize, Serialize};

/// Largest digit allowed in a Sudoku cage.
pub const DEFAULT_MAX_VALUE: i32 = 9;

/// A single (sum, count, max value) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionQuery {
    pub sum: i32,
    pub count: i32,
    pub max_value: i32,
}

impl PartitionQuery {
    /// Query with the default maximum part value.
    pub fn new(sum: i32, count: i32) -> Self {
        Self {
            sum,
            count,
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: i32) -> Self {
        self.max_value = max_value;
        self
    }
}

/// Inclusive ranges of sums and part counts for a partition table.
///
/// The default covers small cages: sums 4 to 18 split into 2 to 4 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    pub min_sum: i32,
    pub max_sum: i32,
    pub min_count: i32,
    pub max_count: i32,
    pub max_value: i32,
}

impl Default for RangeQuery {
    fn default() -> Self {
        Self {
            min_sum: 4,
            max_sum: 18,
            min_count: 2,
            max_count: 4,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl RangeQuery {
    pub fn new(min_sum: i32, max_sum: i32, min_count: i32, max_count: i32) -> Self {
        Self {
            min_sum,
            max_sum,
            min_count,
            max_count,
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: i32) -> Self {
        self.max_value = max_value;
        self
    }

    /// Number of sum rows; zero when the sum range is inverted.
    pub fn rows(&self) -> usize {
        span(self.min_sum, self.max_sum)
    }

    /// Number of count columns; zero when the count range is inverted.
    pub fn columns(&self) -> usize {
        span(self.min_count, self.max_count)
    }
}

fn span(min: i32, max: i32) -> usize {
    let width = i64::from(max) - i64::from(min) + 1;
    usize::try_from(width).unwrap_or(0)
}
