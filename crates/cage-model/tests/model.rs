//! Tests for cage-model types.

use cage_model::{Classification, Partition, PartitionSet, PartitionTable, RangeQuery};

fn set(rows: &[&[u32]]) -> PartitionSet {
    rows.iter()
        .map(|parts| Partition::from_descending(parts.to_vec()))
        .collect()
}

#[test]
fn partition_set_serializes_as_nested_arrays() {
    let partitions = set(&[&[4, 1], &[3, 2]]);
    let json = serde_json::to_string(&partitions).expect("serialize set");
    assert_eq!(json, "[[4,1],[3,2]]");
    let round: PartitionSet = serde_json::from_str(&json).expect("deserialize set");
    assert_eq!(round, partitions);
}

#[test]
fn partition_deserialization_rejects_ascending_parts() {
    let result: Result<Partition, _> = serde_json::from_str("[1,2,3]");
    assert!(result.is_err());
    let zero: Result<Partition, _> = serde_json::from_str("[3,0]");
    assert!(zero.is_err());
}

#[test]
fn classification_serializes_named_groups() {
    let classification = Classification {
        unique: set(&[&[3, 2]]),
        repeated: set(&[&[2, 2, 1]]),
    };
    let value = serde_json::to_value(&classification).expect("serialize classification");
    assert_eq!(value["unique"], serde_json::json!([[3, 2]]));
    assert_eq!(value["repeated"], serde_json::json!([[2, 2, 1]]));
}

#[test]
fn table_serializes_query_and_cells() {
    let table = PartitionTable::from_fn(RangeQuery::new(2, 2, 1, 2), |sum, count| {
        if count == 1 {
            set(&[&[u32::try_from(sum).expect("positive sum")]])
        } else {
            set(&[&[1, 1]])
        }
    });
    let value = serde_json::to_value(&table).expect("serialize table");
    assert_eq!(value["query"]["min_sum"], 2);
    assert_eq!(value["rows"], 1);
    assert_eq!(value["columns"], 2);
    assert_eq!(value["cells"], serde_json::json!([[[2]], [[1, 1]]]));
}
