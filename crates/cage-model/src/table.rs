//! Two-dimensional table of partition sets keyed by sum and part count.

use serde::Serialize;

use crate::partition::PartitionSet;
use crate::query::RangeQuery;

/// Partition sets for every (sum, count) pair of a [`RangeQuery`].
///
/// Cells are stored row-major: one row per sum (ascending), one column per
/// part count (ascending). The table is built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionTable {
    query: RangeQuery,
    rows: usize,
    columns: usize,
    cells: Vec<PartitionSet>,
}

impl PartitionTable {
    /// Build a table by evaluating `cell` for each (sum, count) in row-major order.
    pub fn from_fn<F>(query: RangeQuery, mut cell: F) -> Self
    where
        F: FnMut(i32, i32) -> PartitionSet,
    {
        let rows = query.rows();
        let columns = query.columns();
        let mut cells = Vec::with_capacity(initial_capacity(rows, columns));
        for sum in (0..rows).map(|i| offset(query.min_sum, i)) {
            for count in (0..columns).map(|j| offset(query.min_count, j)) {
                cells.push(cell(sum, count));
            }
        }
        Self {
            query,
            rows,
            columns,
            cells,
        }
    }

    pub fn query(&self) -> &RangeQuery {
        &self.query
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Sum labelling row `i`.
    pub fn sum_at(&self, i: usize) -> i32 {
        offset(self.query.min_sum, i)
    }

    /// Part count labelling column `j`.
    pub fn count_at(&self, j: usize) -> i32 {
        offset(self.query.min_count, j)
    }

    pub fn max_value(&self) -> i32 {
        self.query.max_value
    }

    /// Cell at sum offset `i` and count offset `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<&PartitionSet> {
        if i >= self.rows || j >= self.columns {
            return None;
        }
        self.cells.get(i * self.columns + j)
    }

    /// Cell for an absolute sum and part count.
    pub fn cell(&self, sum: i32, count: i32) -> Option<&PartitionSet> {
        let i = usize::try_from(i64::from(sum) - i64::from(self.query.min_sum)).ok()?;
        let j = usize::try_from(i64::from(count) - i64::from(self.query.min_count)).ok()?;
        self.get(i, j)
    }

    pub fn row(&self, i: usize) -> Option<TableRow<'_>> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.columns;
        Some(TableRow {
            sum: self.sum_at(i),
            min_count: self.query.min_count,
            cells: &self.cells[start..start + self.columns],
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        (0..self.rows).filter_map(move |i| self.row(i))
    }

    pub fn total_partitions(&self) -> usize {
        self.cells.iter().map(PartitionSet::len).sum()
    }
}

/// One sum's worth of cells.
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    pub sum: i32,
    min_count: i32,
    cells: &'a [PartitionSet],
}

impl<'a> TableRow<'a> {
    /// `(count, cell)` pairs in ascending count order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &'a PartitionSet)> + use<'a> {
        let min_count = self.min_count;
        let cells = self.cells;
        cells
            .iter()
            .enumerate()
            .map(move |(j, cell)| (offset(min_count, j), cell))
    }

    pub fn cells(&self) -> &'a [PartitionSet] {
        self.cells
    }
}

/// Cells reserved up front; larger tables grow as they fill.
const MAX_PRESIZED_CELLS: usize = 4096;

fn initial_capacity(rows: usize, columns: usize) -> usize {
    rows.saturating_mul(columns).min(MAX_PRESIZED_CELLS)
}

// Offsets never exceed the i32 range they were derived from.
fn offset(base: i32, index: usize) -> i32 {
    let index = i32::try_from(index).unwrap_or(i32::MAX);
    base.saturating_add(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Partition;

    fn single(sum: i32, count: i32) -> PartitionSet {
        let part = u32::try_from(sum * 10 + count).unwrap_or(1);
        PartitionSet::new(vec![Partition::from_descending(vec![part])])
    }

    fn single_empty(_sum: i32, _count: i32) -> PartitionSet {
        PartitionSet::default()
    }

    #[test]
    fn cells_are_row_major_by_sum_then_count() {
        let table = PartitionTable::from_fn(RangeQuery::new(3, 4, 1, 2), single);
        assert_eq!(table.rows(), 2);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.get(0, 1), Some(&single(3, 2)));
        assert_eq!(table.get(1, 0), Some(&single(4, 1)));
        assert_eq!(table.cell(4, 2), Some(&single(4, 2)));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.cell(2, 1), None);
        assert_eq!(table.cell(3, 3), None);
    }

    #[test]
    fn rows_report_their_sum_and_counts() {
        let table = PartitionTable::from_fn(RangeQuery::new(5, 6, 2, 3), single);
        let sums: Vec<i32> = table.iter_rows().map(|row| row.sum).collect();
        assert_eq!(sums, vec![5, 6]);
        let counts: Vec<i32> = table
            .row(1)
            .expect("row")
            .iter()
            .map(|(count, _)| count)
            .collect();
        assert_eq!(counts, vec![2, 3]);
        assert_eq!(table.total_partitions(), 4);
    }

    #[test]
    fn inverted_count_range_keeps_rows_without_columns() {
        let table = PartitionTable::from_fn(RangeQuery::new(5, 7, 3, 2), single);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.columns(), 0);
        assert_eq!(table.iter_rows().count(), 3);
        assert!(table.row(0).expect("row").cells().is_empty());
    }

    #[test]
    fn presize_is_bounded_for_full_integer_ranges() {
        let full = RangeQuery::new(i32::MIN, i32::MAX, i32::MIN, i32::MAX);
        assert_eq!(initial_capacity(full.rows(), full.columns()), MAX_PRESIZED_CELLS);
        assert_eq!(initial_capacity(3, 4), 12);
        assert_eq!(initial_capacity(5, 0), 0);
    }

    #[test]
    fn labels_saturate_at_the_integer_limit() {
        let table =
            PartitionTable::from_fn(RangeQuery::new(i32::MAX, i32::MAX, 2, 3), single_empty);
        assert_eq!(table.sum_at(0), i32::MAX);
        assert_eq!(table.count_at(1), 3);
        let edge = PartitionTable::from_fn(RangeQuery::new(1, 1, i32::MAX, i32::MAX), single_empty);
        assert_eq!(edge.count_at(0), i32::MAX);
        assert_eq!(edge.cell(1, i32::MAX), Some(&PartitionSet::default()));
    }

    #[test]
    fn inverted_sum_range_is_empty() {
        let table = PartitionTable::from_fn(RangeQuery::new(9, 8, 1, 3), single);
        assert_eq!(table.rows(), 0);
        assert_eq!(table.total_partitions(), 0);
        assert!(table.row(0).is_none());
    }
}
