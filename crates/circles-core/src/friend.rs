//! Friend records and the name comparator used to order circles.
//!
//! A [`Friend`] refers to its own friends by name only. The graph is an
//! adjacency list keyed by name, so records never own or point at each other.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;

/// Gender attribute of a friend record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

/// A friend record.
///
/// The JSON shape is `{"name", "gender", "best", "friends"}`; every field
/// except `name` may be omitted. A record without a `friends` list has no
/// neighbors.
///
/// # Example
///
/// ```rust
/// use circles_core::{Friend, Gender};
///
/// let sam = Friend::new("Sam", Gender::Male)
///     .as_best()
///     .with_friends(["Mat", "Sharon"]);
///
/// assert_eq!(sam.name(), "Sam");
/// assert!(sam.is_best());
/// assert_eq!(sam.friends(), ["Mat", "Sharon"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(default)]
    best: bool,
    #[serde(default)]
    friends: Vec<String>,
}

impl Friend {
    /// Creates a record with the given name and gender, not marked best and
    /// without neighbors.
    #[must_use]
    pub fn new(name: &str, gender: Gender) -> Self {
        Self {
            name: name.to_string(),
            gender: Some(gender),
            best: false,
            friends: Vec::new(),
        }
    }

    /// Creates a record without a gender.
    ///
    /// Such a record only survives the `Everyone` filter.
    #[must_use]
    pub fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            gender: None,
            best: false,
            friends: Vec::new(),
        }
    }

    /// Marks this record as a best friend, seeding the first circle (builder pattern).
    #[must_use]
    pub fn as_best(mut self) -> Self {
        self.best = true;
        self
    }

    /// Sets the neighbor names of this record (builder pattern).
    #[must_use]
    pub fn with_friends<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.friends = names.into_iter().map(Into::into).collect();
        self
    }

    /// Parses a JSON array of friend records.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the text is not a JSON array of records.
    pub fn from_json_array(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the unique name of this record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the gender, if known.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Returns true if this record is marked as a best friend.
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.best
    }

    /// Returns the declared neighbor names, in declaration order.
    #[must_use]
    pub fn friends(&self) -> &[String] {
        &self.friends
    }
}

/// Orders friend records by name (case-sensitive, lexicographic).
///
/// Used as the sort key of every circle.
#[must_use]
pub fn by_name(a: &Friend, b: &Friend) -> Ordering {
    a.name.cmp(&b.name)
}
