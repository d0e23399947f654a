// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel rectangles and the rule mapping tree depth to regions.
//!
//! The root covers the whole canvas. At depth `d`:
//!
//! - even `d`: the region is square and splits into top (left child) and
//!   bottom (right child) halves;
//! - odd `d`: the region is twice as wide as tall and splits into left (left
//!   child) and right (right child) halves.
//!
//! An inclusive range `[lo, hi]` halves into `[lo, lo + (hi - lo) / 2]` and
//! `[lo + (hi - lo) / 2 + 1, hi]`. Every tree algorithm and the persisted
//! format rely on exactly this rule.

use crate::types::CANVAS_SIZE;

/// Which axis a node's region is halved along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Split {
    /// Left child is the top half, right child the bottom half.
    TopBottom,
    /// Left child is the left half, right child the right half.
    LeftRight,
}

impl Split {
    /// The split used by nodes at `depth`.
    pub const fn for_depth(depth: u32) -> Self {
        if depth % 2 == 0 {
            Self::TopBottom
        } else {
            Self::LeftRight
        }
    }
}

/// Axis-aligned pixel rectangle with inclusive bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Leftmost column.
    pub min_x: i32,
    /// Top row.
    pub min_y: i32,
    /// Rightmost column (inclusive).
    pub max_x: i32,
    /// Bottom row (inclusive).
    pub max_y: i32,
}

impl Region {
    /// The whole canvas, covered by the root node.
    pub const CANVAS: Self = Self::new(0, 0, CANVAS_SIZE - 1, CANVAS_SIZE - 1);

    /// Create a region from inclusive corners.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a region from origin and size. Empty when `w` or `h` is not positive.
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x.saturating_add(w).saturating_sub(1),
            max_y: y.saturating_add(h).saturating_sub(1),
        }
    }

    /// Number of columns; zero when empty.
    pub const fn width(&self) -> i32 {
        if self.max_x < self.min_x {
            0
        } else {
            self.max_x - self.min_x + 1
        }
    }

    /// Number of rows; zero when empty.
    pub const fn height(&self) -> i32 {
        if self.max_y < self.min_y {
            0
        } else {
            self.max_y - self.min_y + 1
        }
    }

    /// True if the region holds no pixel.
    pub const fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Whether the pixel `(x, y)` lies inside.
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Whether `other` lies entirely inside. An empty `other` is always inside.
    pub const fn contains(&self, other: &Self) -> bool {
        other.is_empty()
            || (self.min_x <= other.min_x
                && other.max_x <= self.max_x
                && self.min_y <= other.min_y
                && other.max_y <= self.max_y)
    }

    /// The intersection of two regions (possibly empty).
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        }
    }

    /// Whether some pixel `(i, i)` of the main diagonal lies inside.
    pub const fn touches_diagonal(&self) -> bool {
        !(self.is_empty() || self.max_x < self.min_y || self.max_y < self.min_x)
    }

    /// Halve the region of a node at `depth` into its children's regions.
    pub const fn split(&self, depth: u32) -> (Self, Self) {
        match Split::for_depth(depth) {
            Split::TopBottom => {
                let mid = halve(self.min_y, self.max_y);
                (
                    Self::new(self.min_x, self.min_y, self.max_x, mid),
                    Self::new(self.min_x, mid + 1, self.max_x, self.max_y),
                )
            }
            Split::LeftRight => {
                let mid = halve(self.min_x, self.max_x);
                (
                    Self::new(self.min_x, self.min_y, mid, self.max_y),
                    Self::new(mid + 1, self.min_y, self.max_x, self.max_y),
                )
            }
        }
    }
}

/// Last element of the lower half of `[lo, hi]`.
const fn halve(lo: i32, hi: i32) -> i32 {
    lo + (hi - lo) / 2
}
