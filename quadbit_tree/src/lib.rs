// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadbit Tree: a recursive binary tree with sentinel nodes.
//!
//! Quadbit Tree is the storage substrate for `quadbit_image`, but it is a plain
//! generic container and can be used on its own.
//!
//! - Every tree value is a view onto one node: absent (a sentinel with no value
//!   and no children) or present (one value and two child trees).
//! - Child views borrow into the parent's storage, so algorithms mutate a tree
//!   in place by walking down through [`RecursiveTree::node_mut`].
//! - Equality is structural and independent of which storage holds the nodes.
//! - Pre-order and in-order iteration over the present values.
//!
//! Backings are pluggable via the [`RecursiveTree`] trait: a backing implements
//! five structural primitives and receives the rest of the API for free.
//! The default backing is [`BinaryTree`], where each node owns its children in
//! a `Box`.
//!
//! # Example
//!
//! ```rust
//! use quadbit_tree::{BinaryTree, NodeType, RecursiveTree};
//!
//! //      1
//! //     / \
//! //    2   3
//! let mut tree = BinaryTree::new();
//! tree.create_root_with_value(1).unwrap();
//! let (_, left, right) = tree.node_mut().unwrap();
//! left.create_root_with_value(2).unwrap();
//! right.create_root_with_value(3).unwrap();
//! assert_eq!(tree.node_type(), NodeType::Double);
//!
//! // A child view aliases the parent's storage.
//! tree.left_mut().unwrap().set_root_value(20);
//! let values: Vec<_> = tree.pre_order().copied().collect();
//! assert_eq!(values, [1, 20, 3]);
//!
//! // Removing the root of a double node is refused.
//! assert!(tree.remove_root().is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The minimum supported Rust version
//! is 1.88.

#![no_std]

extern crate alloc;

pub mod binary_tree;
pub mod iter;
pub mod tree;
pub mod types;

pub use binary_tree::BinaryTree;
pub use iter::{InOrder, PreOrder};
pub use tree::RecursiveTree;
pub use types::{NodeType, TreeError};
