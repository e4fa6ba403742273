//! # Circles Core
//!
//! Breadth-first "circles" over a set of friend records.
//!
//! Circle 1 holds every friend marked as best. Each following circle holds the
//! friends of the previous one that have not been invited yet. Within a
//! circle, friends are ordered by name. The result can be limited to a number
//! of circles and narrowed by gender, then consumed one friend at a time.
//!
//! ## Features
//!
//! - **Name-keyed graph**: records reference each other by name only
//! - **Deterministic order**: circle by circle, then by name
//! - **Filters**: everyone, male-only, female-only, or any [`FriendFilter`]
//! - **Configuration**: `circles.toml` and `CIRCLES_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use circles_core::{Friend, FriendsIterator, Gender, GenderFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let friends = Friend::from_json_array(r#"[
//!         {"name": "Sam",   "gender": "male",   "best": true, "friends": ["Sally"]},
//!         {"name": "Sally", "gender": "female", "friends": ["Sam", "Brad"]},
//!         {"name": "Brad",  "gender": "male",   "friends": ["Sally"]}
//!     ]"#)?;
//!
//!     // Every male friend within two circles
//!     let invited: Vec<&str> = FriendsIterator::bounded(&friends, &GenderFilter::male(), 2)
//!         .map(Friend::name)
//!         .collect();
//!     assert_eq!(invited, ["Sam"]);
//!
//!     // Everyone, no cap
//!     let mut all = FriendsIterator::new(&friends, &GenderFilter::everyone());
//!     while !all.done() {
//!         let _friend = all.next();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filter;
pub mod friend;
pub mod graph;
pub mod iterator;
#[cfg(test)]
mod iterator_tests;

pub use config::CirclesConfig;
pub use error::{Error, Result};
pub use filter::{FriendFilter, GenderFilter};
pub use friend::{by_name, Friend, Gender};
pub use graph::{Circle, FriendIndex};
pub use iterator::{BoundedIterator, FriendsIterator};
