//! Tests for FriendIndex.

use super::index::FriendIndex;
use crate::friend::{Friend, Gender};

fn build_friends() -> Vec<Friend> {
    vec![
        Friend::new("Sam", Gender::Male).as_best(),
        Friend::new("Sally", Gender::Female).with_friends(["Sam"]),
        Friend::new("Brad", Gender::Male).as_best(),
    ]
}

#[test]
fn test_get_by_name() {
    let friends = build_friends();
    let index = FriendIndex::new(&friends);
    assert_eq!(index.len(), 3);
    assert_eq!(index.get("Sally").map(Friend::name), Some("Sally"));
    assert!(index.get("Nobody").is_none());
    assert!(index.contains("Brad"));
    assert!(!index.contains("brad"));
}

#[test]
fn test_best_friends_in_input_order() {
    let friends = build_friends();
    let index = FriendIndex::new(&friends);
    let names: Vec<&str> = index.best_friends().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["Sam", "Brad"]);
}

#[test]
fn test_duplicate_name_first_wins() {
    let friends = vec![
        Friend::new("Twin", Gender::Male),
        Friend::new("Twin", Gender::Female),
    ];
    let index = FriendIndex::new(&friends);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("Twin").and_then(Friend::gender), Some(Gender::Male));
}

#[test]
fn test_index_borrows_records() {
    let friends = build_friends();
    let index = FriendIndex::new(&friends);
    let resolved = index.get("Sam").unwrap();
    assert!(std::ptr::eq(resolved, &friends[0]));
}

#[test]
fn test_empty_index() {
    let index = FriendIndex::new(&[]);
    assert!(index.is_empty());
    assert!(index.best_friends().is_empty());
}
