//! Friend graph module.
//!
//! Provides the name index over friend records and the breadth-first
//! circle expansion built on top of it.
//!
//! # Example
//!
//! ```rust
//! use circles_core::graph::{collect_circles, FriendIndex};
//! use circles_core::{Friend, Gender};
//!
//! let friends = vec![
//!     Friend::new("Sam", Gender::Male).as_best().with_friends(["Sally"]),
//!     Friend::new("Sally", Gender::Female),
//! ];
//! let index = FriendIndex::new(&friends);
//!
//! let circles = collect_circles(&index, None);
//! assert_eq!(circles.len(), 2);
//! assert_eq!(circles[1].names(), ["Sally"]);
//! ```

pub mod circles;
mod index;

#[cfg(test)]
mod index_tests;

pub use circles::{collect_circles, flatten, Circle};
pub use index::FriendIndex;
