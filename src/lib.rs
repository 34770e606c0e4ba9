//! This crate exposes an ordered set built on a plain, unbalanced
//! Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree never rebalances itself, so the
//! height depends entirely on insertion order: values added in sorted order
//! give a tree as tall as it is large. Sorted iteration comes from visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Layout
//!
//! - [`TreeNode`] is a handle to one node. Children are owned by their
//!   parent and each node keeps a weak link back up to its parent.
//! - [`TreeSet`] owns the root node, counts the values, and builds set
//!   algebra on top of node insertion, search, and removal.
//!
//! # Examples
//!
//! ```
//! use bst_set::TreeSet;
//!
//! let a = TreeSet::from([5, 3, 8]);
//! let b = TreeSet::from([8, 1, 10]);
//!
//! assert_eq!((&a | &b).to_vec(), vec![1, 3, 5, 8, 10]);
//! assert_eq!((&a ^ &b).to_vec(), vec![1, 3, 5, 10]);
//! assert!(TreeSet::from([3, 5]).subset_of(&a));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod node;
pub mod set;
pub mod traversal;
mod util;


pub use error::NilValueError;
pub use node::TreeNode;
pub use set::TreeSet;
