use cage_model::{PartitionTable, RangeQuery};
use tracing::{debug, debug_span};

use crate::generator::generate;

/// Partition sets for every sum in `min_sum..=max_sum` and every part count
/// in `min_count..=max_count`.
///
/// An inverted range is not an error: it contributes zero rows or columns.
pub fn generate_range(
    min_sum: i32,
    max_sum: i32,
    min_count: i32,
    max_count: i32,
    max_value: i32,
) -> PartitionTable {
    generate_range_query(
        &RangeQuery::new(min_sum, max_sum, min_count, max_count).with_max_value(max_value),
    )
}

pub fn generate_range_query(query: &RangeQuery) -> PartitionTable {
    let span = debug_span!(
        "generate_range",
        min_sum = query.min_sum,
        max_sum = query.max_sum,
        min_count = query.min_count,
        max_count = query.max_count,
        max_value = query.max_value
    );
    let _guard = span.enter();
    let max_value = query.max_value;
    let table = PartitionTable::from_fn(*query, |sum, count| generate(sum, count, max_value));
    debug!(
        rows = table.rows(),
        columns = table.columns(),
        partitions = table.total_partitions(),
        "built partition table"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use cage_model::PartitionSet;

    #[test]
    fn dimensions_follow_inclusive_ranges() {
        let table = generate_range(4, 18, 2, 4, 9);
        assert_eq!(table.rows(), 15);
        assert_eq!(table.columns(), 3);
    }

    #[test]
    fn every_cell_matches_a_direct_call() {
        let table = generate_range(3, 12, 1, 4, 6);
        for i in 0..table.rows() {
            for j in 0..table.columns() {
                let sum = 3 + i32::try_from(i).expect("row offset");
                let count = 1 + i32::try_from(j).expect("column offset");
                assert_eq!(table.get(i, j), Some(&generate(sum, count, 6)));
            }
        }
    }

    #[test]
    fn query_form_matches_positional_form() {
        let query = RangeQuery::new(6, 9, 2, 3).with_max_value(5);
        assert_eq!(generate_range_query(&query), generate_range(6, 9, 2, 3, 5));
    }

    #[test]
    fn inverted_ranges_are_empty_not_errors() {
        let no_rows = generate_range(10, 9, 2, 3, 9);
        assert_eq!(no_rows.rows(), 0);
        let no_columns = generate_range(5, 6, 4, 3, 9);
        assert_eq!(no_columns.rows(), 2);
        assert_eq!(no_columns.columns(), 0);
        assert_eq!(no_columns.total_partitions(), 0);
    }

    #[test]
    fn cells_that_cannot_be_filled_stay_empty() {
        let table = generate_range(4, 4, 2, 5, 9);
        assert_eq!(table.cell(4, 2).map(PartitionSet::len), Some(2));
        assert_eq!(table.cell(4, 4).map(PartitionSet::len), Some(1));
        assert_eq!(table.cell(4, 5).map(PartitionSet::len), Some(0));
    }
}
