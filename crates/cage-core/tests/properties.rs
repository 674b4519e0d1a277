//! Property tests for partition generation, classification, and tables.

use std::collections::HashSet;

use cage_core::{classify, generate, generate_range};
use cage_model::Partition;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn every_partition_is_valid(sum in 1i32..=30, count in 1i32..=9, max_value in 1i32..=9) {
        for partition in &generate(sum, count, max_value) {
            prop_assert_eq!(partition.len(), usize::try_from(count).unwrap());
            prop_assert_eq!(partition.sum(), u64::try_from(sum).unwrap());
            let max = u32::try_from(max_value).unwrap();
            prop_assert!(partition.parts().iter().all(|&part| (1..=max).contains(&part)));
            prop_assert!(partition.parts().windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }

    #[test]
    fn output_is_strictly_descending_without_duplicates(
        sum in 1i32..=30,
        count in 1i32..=9,
        max_value in 1i32..=9,
    ) {
        let set = generate(sum, count, max_value);
        let distinct: HashSet<&Partition> = set.iter().collect();
        prop_assert_eq!(distinct.len(), set.len());
        for pair in set.as_slice().windows(2) {
            prop_assert!(pair[0].parts() > pair[1].parts());
        }
    }

    #[test]
    fn single_part_matches_bounds(sum in -5i32..=20, max_value in -2i32..=12) {
        let set = generate(sum, 1, max_value);
        if (1..=max_value).contains(&sum) {
            prop_assert_eq!(set.len(), 1);
            prop_assert_eq!(set.first().map(Partition::sum), Some(u64::try_from(sum).unwrap()));
        } else {
            prop_assert!(set.is_empty());
        }
    }

    #[test]
    fn non_positive_sum_or_count_is_empty(
        sum in -10i32..=0,
        count in -10i32..=0,
        other in 1i32..=20,
        max_value in 1i32..=9,
    ) {
        prop_assert!(generate(sum, other, max_value).is_empty());
        prop_assert!(generate(other, count, max_value).is_empty());
    }

    #[test]
    fn generation_is_repeatable(sum in 1i32..=30, count in 1i32..=6) {
        prop_assert_eq!(generate(sum, count, 9), generate(sum, count, 9));
    }

    #[test]
    fn classification_repartitions_input(sum in 1i32..=30, count in 1i32..=6) {
        let set = generate(sum, count, 9);
        let classification = classify(&set);
        prop_assert_eq!(classification.len(), set.len());
        for partition in &classification.unique {
            let distinct: HashSet<u32> = partition.parts().iter().copied().collect();
            prop_assert_eq!(distinct.len(), partition.len());
        }
        for partition in &classification.repeated {
            let distinct: HashSet<u32> = partition.parts().iter().copied().collect();
            prop_assert!(distinct.len() < partition.len());
        }
        let mut unique = classification.unique.iter();
        let mut repeated = classification.repeated.iter();
        let mut next_unique = unique.next();
        let mut next_repeated = repeated.next();
        for partition in &set {
            if next_unique == Some(partition) {
                next_unique = unique.next();
            } else {
                prop_assert_eq!(next_repeated, Some(partition));
                next_repeated = repeated.next();
            }
        }
        prop_assert!(next_unique.is_none() && next_repeated.is_none());
    }

    #[test]
    fn table_cells_match_direct_generation(
        min_sum in 1i32..=15,
        sums in 0i32..=5,
        min_count in 1i32..=4,
        counts in 0i32..=3,
    ) {
        let table = generate_range(min_sum, min_sum + sums, min_count, min_count + counts, 9);
        prop_assert_eq!(table.rows(), usize::try_from(sums + 1).unwrap());
        prop_assert_eq!(table.columns(), usize::try_from(counts + 1).unwrap());
        for row in table.iter_rows() {
            for (count, cell) in row.iter() {
                prop_assert_eq!(cell, &generate(row.sum, count, 9));
            }
        }
    }
}

#[test]
fn classic_cage_counts() {
    // 45 in nine cells and 3 in two cells each have a single repeat-free answer.
    assert_eq!(classify(&generate(45, 9, 9)).unique.len(), 1);
    assert_eq!(classify(&generate(3, 2, 9)).unique.len(), 1);
    assert_eq!(classify(&generate(16, 2, 9)).unique.len(), 1);
    assert_eq!(classify(&generate(16, 2, 9)).repeated.len(), 1);
}
