//! This crate exposes a plain Binary Search Tree (BST) with a bidirectional cursor, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does no rebalancing, so inserting
//! keys in sorted order builds a chain whose height is the number of keys.
//!
//! Every `Node` also remembers its parent. From any `Node` the next and previous keys in order
//! (its successor and predecessor) can be reached by walking the links, which is how
//! [`Cursor`] and [`Iter`] move.
//!
//! ## Deletion
//!
//! Removing a `Node` with two children uses Hibbard deletion: the smallest `Node` of its right
//! subtree is unhooked and put in its place.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod cursor;
mod error;
mod tree;


pub use cursor::{Cursor, Iter};
pub use error::TreeError;
pub use tree::Tree;
