//! Breadth-first expansion of friend circles.
//!
//! Circle 1 holds every best friend. Circle `k + 1` holds the not yet visited
//! neighbors of circle `k`. Each circle is sorted by name, and a name is
//! placed in at most one circle.

use std::collections::HashSet;

use crate::friend::{by_name, Friend};

use super::index::FriendIndex;

/// One breadth-first level of the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle<'a> {
    level: usize,
    friends: Vec<&'a Friend>,
}

impl<'a> Circle<'a> {
    /// Returns the 1-based level of this circle.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the members of this circle, sorted by name.
    #[must_use]
    pub fn friends(&self) -> &[&'a Friend] {
        &self.friends
    }

    /// Returns the member names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        self.friends.iter().map(|f| f.name()).collect()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// Returns true if this circle has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

/// Expands circles from the best friends outwards.
///
/// Stops when a circle comes out empty or after `max_level` circles,
/// whichever happens first. `None` means no cap; `Some(0)` yields no circles.
/// Neighbor names that match no record are dropped.
///
/// # Arguments
///
/// * `index` - Name index over the input records
/// * `max_level` - Maximum number of circles to visit
#[must_use]
pub fn collect_circles<'a>(index: &FriendIndex<'a>, max_level: Option<usize>) -> Vec<Circle<'a>> {
    let max_level = max_level.unwrap_or(usize::MAX);
    let mut circles = Vec::new();
    let mut visited: HashSet<&'a str> = HashSet::new();

    let mut frontier: Vec<&'a Friend> = index
        .best_friends()
        .into_iter()
        .filter(|f| visited.insert(f.name()))
        .collect();
    frontier.sort_by(|a, b| by_name(a, b));

    let mut level = 1usize;
    while level <= max_level && !frontier.is_empty() {
        tracing::trace!(level, size = frontier.len(), "Circle collected");
        let current = std::mem::take(&mut frontier);
        level += 1;

        if level <= max_level {
            frontier = next_circle(index, &current, &visited);
            for friend in &frontier {
                visited.insert(friend.name());
            }
        }

        circles.push(Circle {
            level: level - 1,
            friends: current,
        });
    }

    circles
}

/// Concatenates circles in level order.
#[must_use]
pub fn flatten<'a>(circles: &[Circle<'a>]) -> Vec<&'a Friend> {
    circles
        .iter()
        .flat_map(|c| c.friends.iter().copied())
        .collect()
}

/// Resolves the unvisited neighbors of `frontier`, in name order.
///
/// Names are collected in first-encounter order so that a neighbor shared by
/// several frontier members is taken once.
fn next_circle<'a>(
    index: &FriendIndex<'a>,
    frontier: &[&'a Friend],
    visited: &HashSet<&'a str>,
) -> Vec<&'a Friend> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut names: Vec<&'a str> = Vec::new();

    for &friend in frontier {
        for name in friend.friends() {
            let name = name.as_str();
            if !visited.contains(name) && seen.insert(name) {
                names.push(name);
            }
        }
    }

    let mut next: Vec<&'a Friend> = names
        .into_iter()
        .filter_map(|name| {
            let resolved = index.get(name);
            if resolved.is_none() {
                tracing::trace!(name, "Unknown friend name dropped");
            }
            resolved
        })
        .collect();
    next.sort_by(|a, b| by_name(a, b));
    next
}
