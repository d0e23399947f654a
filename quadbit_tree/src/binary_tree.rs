// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, boxed tree backing.

use alloc::boxed::Box;
use core::fmt;

use crate::iter::InOrder;
use crate::tree::RecursiveTree;
use crate::types::TreeError;

/// Binary tree in which each present node exclusively owns its two children.
///
/// Child views returned by [`RecursiveTree::node`] and friends are plain
/// borrows into this storage. An absent node owns nothing at all, so children
/// exist exactly when their parent is present.
///
/// Equality and hashing are structural: a subtree view compares equal to an
/// independently built tree with the same shape and values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BinaryTree<T> {
    root: Option<Box<Node<T>>>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct Node<T> {
    value: T,
    left: BinaryTree<T>,
    right: BinaryTree<T>,
}

impl<T> BinaryTree<T> {
    /// Create an absent tree.
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Create a single leaf holding `value`.
    pub fn leaf(value: T) -> Self {
        Self {
            root: Some(Box::new(Node {
                value,
                left: Self::new(),
                right: Self::new(),
            })),
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecursiveTree<T> for BinaryTree<T> {
    fn node(&self) -> Option<(&T, &Self, &Self)> {
        self.root.as_deref().map(|n| (&n.value, &n.left, &n.right))
    }

    fn node_mut(&mut self) -> Option<(&mut T, &mut Self, &mut Self)> {
        self.root
            .as_deref_mut()
            .map(|n| (&mut n.value, &mut n.left, &mut n.right))
    }

    fn create_root_with_value(&mut self, value: T) -> Result<(), TreeError> {
        if self.root.is_some() {
            return Err(TreeError::OccupiedRoot);
        }
        *self = Self::leaf(value);
        Ok(())
    }

    fn remove_root(&mut self) -> Result<T, TreeError> {
        let Some(node) = self.root.take() else {
            return Err(TreeError::AbsentRoot);
        };
        match (node.left.is_empty(), node.right.is_empty()) {
            (false, false) => {
                self.root = Some(node);
                Err(TreeError::DoubleRoot)
            }
            (true, true) => Ok(node.value),
            (false, true) => {
                let Node { value, left, .. } = *node;
                *self = left;
                Ok(value)
            }
            (true, false) => {
                let Node { value, right, .. } = *node;
                *self = right;
                Ok(value)
            }
        }
    }

    fn clear(&mut self) {
        self.root = None;
    }
}

/// Iterates in-order, like the tree's natural reading order.
impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, BinaryTree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Compact s-expression: `_` for an absent node, `v` for a leaf, `v(l r)` otherwise.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            None => f.write_str("_"),
            Some((value, left, right)) if left.is_empty() && right.is_empty() => {
                write!(f, "{value}")
            }
            Some((value, left, right)) => write!(f, "{value}({left} {right})"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            None => f.write_str("_"),
            Some((value, left, right)) if left.is_empty() && right.is_empty() => {
                write!(f, "{value:?}")
            }
            Some((value, left, right)) => write!(f, "{value:?}({left:?} {right:?})"),
        }
    }
}
