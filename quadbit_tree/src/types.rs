// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node classification and structural errors.

/// Presence pattern of a node and its two children.
///
/// See [`RecursiveTree::node_type`](crate::RecursiveTree::node_type).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Absent node: no value, no children.
    Sentinel,
    /// Present node whose children are both absent.
    Leaf,
    /// Present node with only a left child.
    SimpleLeft,
    /// Present node with only a right child.
    SimpleRight,
    /// Present node with both children present.
    Double,
}

impl NodeType {
    /// Classify a node from its presence and the presence of its children.
    ///
    /// Children of an absent node are ignored.
    pub const fn classify(present: bool, has_left: bool, has_right: bool) -> Self {
        match (present, has_left, has_right) {
            (false, _, _) => Self::Sentinel,
            (true, false, false) => Self::Leaf,
            (true, true, false) => Self::SimpleLeft,
            (true, false, true) => Self::SimpleRight,
            (true, true, true) => Self::Double,
        }
    }
}

/// Precondition violations reported by structural tree operations.
///
/// The tree is left unmodified whenever one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A root was created on a node that already holds a value.
    #[error("node already holds a value")]
    OccupiedRoot,
    /// The operation needs a present node.
    #[error("node is absent")]
    AbsentRoot,
    /// A root with two present children cannot be removed.
    #[error("cannot remove a node with two children")]
    DoubleRoot,
}
