//! Gender-based filter variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::friend::{Friend, Gender};

use super::FriendFilter;

/// Filter selecting friends by gender.
///
/// # Example
///
/// ```rust
/// use circles_core::{Friend, FriendFilter, Gender, GenderFilter};
///
/// let friends = vec![
///     Friend::new("Sam", Gender::Male),
///     Friend::new("Sally", Gender::Female),
/// ];
/// let all: Vec<&Friend> = friends.iter().collect();
///
/// let males = GenderFilter::male().filter_friends(all);
/// assert_eq!(males.len(), 1);
/// assert_eq!(males[0].name(), "Sam");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    /// Keeps every friend.
    #[default]
    Everyone,
    /// Keeps male friends only.
    Male,
    /// Keeps female friends only.
    Female,
}

impl GenderFilter {
    /// Pass-through filter.
    #[must_use]
    pub fn everyone() -> Self {
        Self::Everyone
    }

    /// Male-only filter.
    #[must_use]
    pub fn male() -> Self {
        Self::Male
    }

    /// Female-only filter.
    #[must_use]
    pub fn female() -> Self {
        Self::Female
    }

    /// Returns true if a friend with the given gender passes this filter.
    ///
    /// A friend without a gender only passes `Everyone`.
    #[must_use]
    pub fn matches(self, gender: Option<Gender>) -> bool {
        match self {
            Self::Everyone => true,
            Self::Male => gender == Some(Gender::Male),
            Self::Female => gender == Some(Gender::Female),
        }
    }

    /// Returns the lowercase name of this filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Everyone => "everyone",
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FriendFilter for GenderFilter {
    fn filter_friends<'a>(&self, friends: Vec<&'a Friend>) -> Vec<&'a Friend> {
        if *self == Self::Everyone {
            return friends;
        }
        friends
            .into_iter()
            .filter(|f| self.matches(f.gender()))
            .collect()
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderFilter {
    type Err = Error;

    /// Parses `everyone`, `male` or `female` (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "everyone" => Ok(Self::Everyone),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(Error::InvalidFilter(s.to_string())),
        }
    }
}

impl TryFrom<&str> for GenderFilter {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}
