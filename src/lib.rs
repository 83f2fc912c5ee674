//! This crate exposes a recursive Binary Search Tree (BST) of unique elements,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored elements. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one element and may have up
//! to two child `Node`s, each owned by exactly one parent. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants an element equal to one already stored can never
//! be inserted a second time, so the tree behaves like an ordered set.
//!
//! Searching for an element takes `O(depth)`. The tree in this crate does not
//! rebalance itself, so inserting elements in ascending order produces a chain
//! whose depth is one less than its size. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## Features
//!
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events on insertion and
//!   on rejected arguments. Off by default, in which case the crate never logs.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[macro_use]
mod tracing_helpers;

mod error;
pub mod iter;
pub mod recursive;

pub use error::TreeError;
pub use recursive::Tree;
