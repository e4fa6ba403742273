//! Pull-based iteration over invited friends.
//!
//! [`FriendsIterator`] collects every circle at construction time, filters
//! the concatenated result once, and then hands records out front to back:
//! circle by circle, and by name within a circle.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::config::CirclesConfig;
use crate::error::Result;
use crate::filter::FriendFilter;
use crate::friend::Friend;
use crate::graph::{collect_circles, flatten, FriendIndex};

/// Iterator over invited friends, borrowed from the caller's records.
///
/// # Example
///
/// ```rust
/// use circles_core::{Friend, FriendsIterator, Gender, GenderFilter};
///
/// let friends = vec![
///     Friend::new("A", Gender::Male).as_best().with_friends(["B"]),
///     Friend::new("B", Gender::Female).with_friends(["A", "C"]),
///     Friend::new("C", Gender::Male),
/// ];
///
/// let mut invited = FriendsIterator::new(&friends, &GenderFilter::everyone());
/// assert_eq!(invited.next().map(Friend::name), Some("A"));
/// assert_eq!(invited.next().map(Friend::name), Some("B"));
/// assert_eq!(invited.next().map(Friend::name), Some("C"));
/// assert!(invited.done());
/// assert!(invited.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FriendsIterator<'a> {
    invited: VecDeque<&'a Friend>,
    circle_count: usize,
}

/// Iterator limited to a maximum number of circles.
///
/// Same engine as [`FriendsIterator`]; build one with
/// [`FriendsIterator::bounded`].
pub type BoundedIterator<'a> = FriendsIterator<'a>;

impl<'a> FriendsIterator<'a> {
    /// Creates an iterator over every reachable circle.
    #[must_use]
    pub fn new<F: FriendFilter + ?Sized>(friends: &'a [Friend], filter: &F) -> Self {
        Self::with_max_level(friends, filter, None)
    }

    /// Creates an iterator visiting at most `max_level` circles.
    ///
    /// `max_level = 0` yields nothing.
    #[must_use]
    pub fn bounded<F: FriendFilter + ?Sized>(
        friends: &'a [Friend],
        filter: &F,
        max_level: usize,
    ) -> BoundedIterator<'a> {
        Self::with_max_level(friends, filter, Some(max_level))
    }

    /// Creates an iterator with an optional circle cap (`None` = unbounded).
    #[must_use]
    pub fn with_max_level<F: FriendFilter + ?Sized>(
        friends: &'a [Friend],
        filter: &F,
        max_level: Option<usize>,
    ) -> Self {
        let index = FriendIndex::new(friends);
        let circles = collect_circles(&index, max_level);
        let visited = circles.iter().map(|c| c.len()).sum::<usize>();
        let invited = filter.filter_friends(flatten(&circles));

        tracing::debug!(
            circles = circles.len(),
            visited,
            invited = invited.len(),
            max_level = ?max_level,
            "Friend circles collected"
        );

        Self {
            invited: invited.into(),
            circle_count: circles.len(),
        }
    }

    /// Creates an iterator from configuration.
    ///
    /// The filter name is resolved before any traversal work is done.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` if the configured filter is unknown.
    pub fn from_config(friends: &'a [Friend], config: &CirclesConfig) -> Result<Self> {
        let filter = config.gender_filter()?;
        Ok(Self::with_max_level(friends, &filter, config.max_level))
    }

    /// Returns true once every invited friend has been handed out.
    #[must_use]
    pub fn done(&self) -> bool {
        self.invited.is_empty()
    }

    /// Returns the number of friends not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.invited.len()
    }

    /// Returns the number of circles visited, before filtering.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.circle_count
    }
}

impl<'a> Iterator for FriendsIterator<'a> {
    type Item = &'a Friend;

    fn next(&mut self) -> Option<Self::Item> {
        self.invited.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.invited.len(), Some(self.invited.len()))
    }
}

impl ExactSizeIterator for FriendsIterator<'_> {}

impl FusedIterator for FriendsIterator<'_> {}
