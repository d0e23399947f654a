// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only traversals over the values of a tree.
//!
//! Both iterators keep an explicit stack of borrowed child views, so they never
//! recurse and never allocate per node. Absent nodes contribute no value.

use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::tree::RecursiveTree;

/// Pre-order traversal: value, left subtree, right subtree.
///
/// Created by [`RecursiveTree::pre_order`].
pub struct PreOrder<'a, T, S> {
    stack: Vec<&'a S>,
    _t: PhantomData<&'a T>,
}

impl<'a, T, S: RecursiveTree<T>> PreOrder<'a, T, S> {
    pub(crate) fn new(root: &'a S) -> Self {
        Self {
            stack: vec![root],
            _t: PhantomData,
        }
    }
}

impl<'a, T: 'a, S: RecursiveTree<T>> Iterator for PreOrder<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(tree) = self.stack.pop() {
            if let Some((value, left, right)) = tree.node() {
                self.stack.push(right);
                self.stack.push(left);
                return Some(value);
            }
        }
        None
    }
}

impl<'a, T: 'a, S: RecursiveTree<T>> FusedIterator for PreOrder<'a, T, S> {}

impl<T, S> core::fmt::Debug for PreOrder<'_, T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PreOrder")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// In-order traversal: left subtree, value, right subtree.
///
/// Created by [`RecursiveTree::in_order`].
pub struct InOrder<'a, T, S> {
    // Each entry is a value still to yield and the right subtree to visit after it.
    stack: Vec<(&'a T, &'a S)>,
}

impl<'a, T, S: RecursiveTree<T>> InOrder<'a, T, S> {
    pub(crate) fn new(root: &'a S) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut tree: &'a S) {
        while let Some((value, left, right)) = tree.node() {
            self.stack.push((value, right));
            tree = left;
        }
    }
}

impl<'a, T: 'a, S: RecursiveTree<T>> Iterator for InOrder<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (value, right) = self.stack.pop()?;
        self.push_left_spine(right);
        Some(value)
    }
}

impl<'a, T: 'a, S: RecursiveTree<T>> FusedIterator for InOrder<'a, T, S> {}

impl<T, S> core::fmt::Debug for InOrder<'_, T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InOrder")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}
