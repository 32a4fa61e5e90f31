#![cfg(feature = "serde")]

//! Integration tests for serde support in shared-list.
//!
//! A `SharedList` serializes as a plain sequence.

use rstest::rstest;
use shared_list::shared::SharedList;
use shared_list::shared_list;

#[rstest]
fn test_list_json_roundtrip() {
    let list: SharedList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    let restored: SharedList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_list_serializes_as_sequence() {
    let list = shared_list![1, 2, 3];
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_empty_list_json() {
    let list: SharedList<i32> = SharedList::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");
    let restored: SharedList<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.empty());
}

#[rstest]
fn test_list_nested_structures() {
    let outer = shared_list![shared_list![1, 2], shared_list![3]];
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2],[3]]");

    let restored: SharedList<SharedList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(outer, restored);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<SharedList<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}
