//! Friend filters applied to the finished traversal.
//!
//! A filter only removes records; it never reorders them. Filtering happens
//! once, after every circle has been collected, so a filtered-out friend
//! still leads the traversal to its own friends.

mod gender;
pub mod json_filter;


pub use gender::GenderFilter;

use crate::friend::Friend;

/// Capability shared by every friend filter.
///
/// Implementations must return a subsequence of `friends`: records may be
/// dropped, but the relative order of the kept ones must not change.
pub trait FriendFilter {
    /// Narrows the traversal result.
    fn filter_friends<'a>(&self, friends: Vec<&'a Friend>) -> Vec<&'a Friend>;
}

impl<F: FriendFilter + ?Sized> FriendFilter for &F {
    fn filter_friends<'a>(&self, friends: Vec<&'a Friend>) -> Vec<&'a Friend> {
        (**self).filter_friends(friends)
    }
}

impl<F: FriendFilter + ?Sized> FriendFilter for Box<F> {
    fn filter_friends<'a>(&self, friends: Vec<&'a Friend>) -> Vec<&'a Friend> {
        (**self).filter_friends(friends)
    }
}
