//! Tests for FriendsIterator and BoundedIterator.

use super::config::CirclesConfig;
use super::error::Error;
use super::filter::{FriendFilter, GenderFilter};
use super::friend::{Friend, Gender};
use super::iterator::{BoundedIterator, FriendsIterator};

/// Three circles of friends around Sam and Sally:
///
/// circle 1: Sally, Sam
/// circle 2: Brad, Emily, Mat, Sharon
/// circle 3: Itan, Julia
fn build_friends() -> Vec<Friend> {
    vec![
        Friend::new("Sam", Gender::Male)
            .as_best()
            .with_friends(["Mat", "Sharon"]),
        Friend::new("Sally", Gender::Female)
            .as_best()
            .with_friends(["Brad", "Emily"]),
        Friend::new("Mat", Gender::Male).with_friends(["Sam", "Sally"]),
        Friend::new("Sharon", Gender::Female).with_friends(["Sam", "Itan", "Julia"]),
        Friend::new("Brad", Gender::Male).with_friends(["Sally", "Emily", "Julia"]),
        Friend::new("Emily", Gender::Female).with_friends(["Sally", "Brad"]),
        Friend::new("Itan", Gender::Male).with_friends(["Sharon", "Julia"]),
        Friend::new("Julia", Gender::Female).with_friends(["Brad", "Itan"]),
    ]
}

fn drain(iter: FriendsIterator<'_>) -> Vec<&str> {
    iter.map(Friend::name).collect()
}

#[test]
fn test_everyone_unbounded() {
    let friends = build_friends();
    let iter = FriendsIterator::new(&friends, &GenderFilter::everyone());
    assert_eq!(iter.circle_count(), 3);
    assert_eq!(
        drain(iter),
        vec!["Sally", "Sam", "Brad", "Emily", "Mat", "Sharon", "Itan", "Julia"]
    );
}

#[test]
fn test_female_unbounded() {
    let friends = build_friends();
    let iter = FriendsIterator::new(&friends, &GenderFilter::female());
    assert_eq!(drain(iter), vec!["Sally", "Emily", "Sharon", "Julia"]);
}

#[test]
fn test_male_bounded_two() {
    let friends = build_friends();
    let iter = FriendsIterator::bounded(&friends, &GenderFilter::male(), 2);
    assert_eq!(drain(iter), vec!["Sam", "Brad", "Mat"]);
}

#[test]
fn test_bounded_iterator_alias() {
    let friends = build_friends();
    let bounded: BoundedIterator<'_> =
        BoundedIterator::bounded(&friends, &GenderFilter::everyone(), 1);
    assert_eq!(drain(bounded), vec!["Sally", "Sam"]);
}

#[test]
fn test_bounded_matches_with_max_level() {
    let friends = build_friends();
    let filter = GenderFilter::female();
    let a = drain(FriendsIterator::bounded(&friends, &filter, 2));
    let b = drain(FriendsIterator::with_max_level(&friends, &filter, Some(2)));
    assert_eq!(a, b);
}

#[test]
fn test_max_level_zero_is_empty() {
    let friends = build_friends();
    let mut iter = FriendsIterator::bounded(&friends, &GenderFilter::everyone(), 0);
    assert!(iter.done());
    assert_eq!(iter.circle_count(), 0);
    assert!(iter.next().is_none());
}

#[test]
fn test_filtered_friend_still_propagates() {
    // Only female friends are invited, but Julia is reached through male Brad.
    let friends = vec![
        Friend::new("Ann", Gender::Female).as_best().with_friends(["Brad"]),
        Friend::new("Brad", Gender::Male).with_friends(["Julia"]),
        Friend::new("Julia", Gender::Female),
    ];
    let iter = FriendsIterator::new(&friends, &GenderFilter::female());
    assert_eq!(drain(iter), vec!["Ann", "Julia"]);
}

#[test]
fn test_next_and_done() {
    let friends = vec![
        Friend::new("A", Gender::Male).as_best().with_friends(["B"]),
        Friend::new("B", Gender::Female),
    ];
    let mut iter = FriendsIterator::new(&friends, &GenderFilter::everyone());

    assert!(!iter.done());
    assert_eq!(iter.remaining(), 2);
    assert_eq!(iter.next().map(Friend::name), Some("A"));
    assert!(!iter.done());
    assert_eq!(iter.next().map(Friend::name), Some("B"));
    assert!(iter.done());
    assert_eq!(iter.remaining(), 0);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_exact_size() {
    let friends = build_friends();
    let mut iter = FriendsIterator::new(&friends, &GenderFilter::male());
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.size_hint(), (3, Some(3)));
}

#[test]
fn test_yields_borrowed_records() {
    let friends = build_friends();
    let mut iter = FriendsIterator::new(&friends, &GenderFilter::everyone());
    let sally = iter.next().unwrap();
    assert!(std::ptr::eq(sally, &friends[1]));
}

#[test]
fn test_empty_input() {
    let mut iter = FriendsIterator::new(&[], &GenderFilter::everyone());
    assert!(iter.done());
    assert!(iter.next().is_none());
}

struct RejectAll;

impl FriendFilter for RejectAll {
    fn filter_friends<'a>(&self, _friends: Vec<&'a Friend>) -> Vec<&'a Friend> {
        Vec::new()
    }
}

#[test]
fn test_custom_filter() {
    let friends = build_friends();
    let iter = FriendsIterator::new(&friends, &RejectAll);
    assert_eq!(iter.circle_count(), 3);
    assert!(iter.done());
}

#[test]
fn test_dyn_filter() {
    let friends = build_friends();
    let filter: Box<dyn FriendFilter> = Box::new(GenderFilter::Male);
    let iter = FriendsIterator::bounded(&friends, filter.as_ref(), 1);
    assert_eq!(drain(iter), vec!["Sam"]);
}

#[test]
fn test_from_config() {
    let friends = build_friends();
    let config = CirclesConfig {
        filter: "female".to_string(),
        max_level: Some(2),
    };
    let iter = FriendsIterator::from_config(&friends, &config).unwrap();
    assert_eq!(drain(iter), vec!["Sally", "Emily", "Sharon"]);
}

#[test]
fn test_from_config_invalid_filter() {
    let friends = build_friends();
    let config = CirclesConfig {
        filter: "robots".to_string(),
        max_level: None,
    };
    let result = FriendsIterator::from_config(&friends, &config);
    assert!(matches!(result, Err(Error::InvalidFilter(name)) if name == "robots"));
}
