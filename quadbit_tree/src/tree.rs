// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `RecursiveTree` trait implemented by every tree backing.

use crate::iter::{InOrder, PreOrder};
use crate::types::{NodeType, TreeError};

/// A mutable binary tree in which every node is itself a tree.
///
/// A value of the implementing type is a *view* onto one node and its subtree.
/// An absent (sentinel) node holds no value and has no children; a present node
/// holds exactly one value and two child trees, each absent or present.
///
/// Children are reached through [`node`](Self::node) and
/// [`node_mut`](Self::node_mut), which borrow straight into the parent's
/// storage. Mutating a child view therefore mutates the parent's subtree; there
/// is no copy involved.
///
/// Backings only implement the five structural primitives. Everything else is
/// provided on top of them, so any backing can be handed to code written
/// against this trait (see `QuadImage::with_factory` in `quadbit_image`).
pub trait RecursiveTree<T>: Sized {
    /// The root value and the two child views, or `None` for an absent node.
    fn node(&self) -> Option<(&T, &Self, &Self)>;

    /// Mutable access to the root value and both child views at once.
    fn node_mut(&mut self) -> Option<(&mut T, &mut Self, &mut Self)>;

    /// Make an absent node present, holding `value` and two absent children.
    ///
    /// Fails with [`TreeError::OccupiedRoot`] if the node is already present.
    fn create_root_with_value(&mut self, value: T) -> Result<(), TreeError>;

    /// Remove the root of a node with at most one present child.
    ///
    /// A leaf becomes absent. A simple node is replaced by its only child,
    /// which moves up one level with its whole subtree. Returns the removed
    /// value.
    ///
    /// Fails with [`TreeError::AbsentRoot`] on an absent node and
    /// [`TreeError::DoubleRoot`] on a double node; the tree is unchanged.
    fn remove_root(&mut self) -> Result<T, TreeError>;

    /// Discard the whole subtree and make this node absent.
    fn clear(&mut self);

    /// True if the node is absent.
    fn is_empty(&self) -> bool {
        self.node().is_none()
    }

    /// Presence pattern of this node and its children.
    fn node_type(&self) -> NodeType {
        match self.node() {
            None => NodeType::Sentinel,
            Some((_, l, r)) => NodeType::classify(true, !l.is_empty(), !r.is_empty()),
        }
    }

    /// The root value, if present.
    fn root_value(&self) -> Option<&T> {
        self.node().map(|(v, _, _)| v)
    }

    /// View of the left child. `None` for an absent node.
    fn left<'a>(&'a self) -> Option<&'a Self>
    where
        T: 'a,
    {
        self.node().map(|(_, l, _)| l)
    }

    /// View of the right child. `None` for an absent node.
    fn right<'a>(&'a self) -> Option<&'a Self>
    where
        T: 'a,
    {
        self.node().map(|(_, _, r)| r)
    }

    /// Mutable view of the left child. `None` for an absent node.
    fn left_mut<'a>(&'a mut self) -> Option<&'a mut Self>
    where
        T: 'a,
    {
        self.node_mut().map(|(_, l, _)| l)
    }

    /// Mutable view of the right child. `None` for an absent node.
    fn right_mut<'a>(&'a mut self) -> Option<&'a mut Self>
    where
        T: 'a,
    {
        self.node_mut().map(|(_, _, r)| r)
    }

    /// Replace the root value, returning the previous one.
    ///
    /// Assigning into an absent node does nothing: `value` is dropped and `None`
    /// is returned. Only [`create_root_with_value`](Self::create_root_with_value)
    /// brings a node into existence.
    fn set_root_value(&mut self, value: T) -> Option<T> {
        let (slot, _, _) = self.node_mut()?;
        Some(core::mem::replace(slot, value))
    }

    /// Discard the subtree and make this node a leaf holding `value`.
    fn reset_to_leaf(&mut self, value: T) {
        self.clear();
        let created = self.create_root_with_value(value);
        debug_assert!(created.is_ok(), "a cleared node accepts a new root");
    }

    /// Number of present nodes in the subtree.
    fn size(&self) -> usize {
        match self.node() {
            None => 0,
            Some((_, l, r)) => 1 + l.size() + r.size(),
        }
    }

    /// Number of present nodes on the longest root-to-leaf path.
    fn height(&self) -> usize {
        match self.node() {
            None => 0,
            Some((_, l, r)) => 1 + l.height().max(r.height()),
        }
    }

    /// True if any node of the subtree holds `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.pre_order().any(|v| v == value)
    }

    /// Values in pre-order: root, then left subtree, then right subtree.
    fn pre_order(&self) -> PreOrder<'_, T, Self> {
        PreOrder::new(self)
    }

    /// Values in in-order: left subtree, then root, then right subtree.
    fn in_order(&self) -> InOrder<'_, T, Self> {
        InOrder::new(self)
    }

    /// Structural equality against a tree of any backing.
    ///
    /// Two absent trees are equal; an absent and a present tree never are; two
    /// present trees are equal when their values and both pairs of children are.
    fn structural_eq<O: RecursiveTree<T>>(&self, other: &O) -> bool
    where
        T: PartialEq,
    {
        match (self.node(), other.node()) {
            (None, None) => true,
            (Some((a, al, ar)), Some((b, bl, br))) => {
                a == b && al.structural_eq(bl) && ar.structural_eq(br)
            }
            _ => false,
        }
    }

    /// Overwrite this subtree with a node-by-node copy of `source`.
    ///
    /// The copy shares no storage with `source`.
    fn copy_from<O: RecursiveTree<T>>(&mut self, source: &O)
    where
        T: Clone,
    {
        self.clear();
        let Some((value, src_left, src_right)) = source.node() else {
            return;
        };
        self.reset_to_leaf(value.clone());
        if let Some((_, left, right)) = self.node_mut() {
            left.copy_from(src_left);
            right.copy_from(src_right);
        }
    }
}
