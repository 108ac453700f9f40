//! A skiplist is a way of storing elements in such a way that elements can be
//! efficiently accessed, inserted and removed, all in `O(log(n))` on average.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where each node `[x]` has references to nodes further down the list,
//! allowing the algorithm to effectively skip ahead.
//!
//! This crate provides a single container built on that structure:
//! [`SortedList`], a value-ordered list which permits duplicates. Every node
//! lives in an arena owned by the list and is addressed by a stable index, so
//! the multi-level link graph involves no raw pointers and no `unsafe`.
//!
//! The list has an associated sorting function which **must** be well-behaved.
//! Specifically, given some ordering function `f(a, b)`, it must satisfy the
//! following properties:
//!
//! - Be well defined: `f(a, b)` should always return the same value.
//! - Be anti-symmetric: `f(a, b) == Greater` if and only if `f(b, a) == Less`,
//!   and `f(a, b) == Equal == f(b, a)`.
//! - Be transitive: If `f(a, b) == Greater` and `f(b, c) == Greater` then
//!   `f(a, c) == Greater`.
//!
//! Failure to satisfy these properties cannot corrupt memory, but it will
//! leave the list in a nonsensical order and searches may miss elements that
//! are present.

pub mod level_generator;
mod skipnode;
mod sorted_list;

pub use crate::skipnode::{IntoIter, Iter};
pub use crate::sorted_list::{CursorMut, SortedList, SortedListError};
