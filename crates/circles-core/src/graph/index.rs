//! Name index over a borrowed set of friend records.
//!
//! Neighbor names are resolved through this index, so the graph stays an
//! adjacency list keyed by name rather than a web of owning references.

use std::collections::HashMap;

use crate::friend::Friend;

/// Read-only lookup from name to friend record.
///
/// Borrows the caller's records for `'a`; nothing is copied. When several
/// records share a name, the first one in input order wins.
#[derive(Debug, Clone, Default)]
pub struct FriendIndex<'a> {
    /// Records in input order.
    friends: &'a [Friend],
    /// Name -> first record carrying that name.
    by_name: HashMap<&'a str, &'a Friend>,
}

impl<'a> FriendIndex<'a> {
    /// Builds the index over `friends`.
    #[must_use]
    pub fn new(friends: &'a [Friend]) -> Self {
        let mut by_name = HashMap::with_capacity(friends.len());
        for friend in friends {
            if by_name.contains_key(friend.name()) {
                tracing::warn!(name = friend.name(), "Duplicate friend name, keeping first record");
                continue;
            }
            by_name.insert(friend.name(), friend);
        }
        Self { friends, by_name }
    }

    /// Resolves a name to its record.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Friend> {
        self.by_name.get(name).copied()
    }

    /// Returns true if a record with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the records marked as best friends, in input order.
    #[must_use]
    pub fn best_friends(&self) -> Vec<&'a Friend> {
        self.friends.iter().filter(|f| f.is_best()).collect()
    }

    /// Returns the number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
