// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree-backed image and its tree algorithms.

use alloc::vec::Vec;
use core::any::Any;
use core::fmt::Debug;

use quadbit_tree::{BinaryTree, NodeType, RecursiveTree};

use crate::by_pixel;
use crate::canvas::{Image, PixelCanvas};
use crate::codec;
use crate::region::Region;
use crate::types::{ImageError, MAX_DEPTH, PixelState, check_point};

/// A 256×256 black-and-white image stored as a binary space partition tree.
///
/// The root covers the canvas and each double node halves its region, top and
/// bottom at even depths and left and right at odd depths (see
/// [`region`](crate::region)). Leaves are uniformly black or white.
///
/// The tree is kept canonical: no double node ever has two leaf children of the
/// same color. Two images with the same pixels therefore have equal trees and
/// encode to the same bytes.
///
/// Every operation works on the tree directly, so cost follows the number of
/// nodes rather than the number of pixels. Transforms return a new image whose
/// tree comes from the same factory as `self`, which keeps a custom backing
/// `B` across operations.
pub struct QuadImage<B = BinaryTree<PixelState>> {
    tree: B,
    factory: fn() -> B,
}

impl QuadImage {
    /// An all-black image on the default boxed backing.
    pub fn new() -> Self {
        Self::with_factory(BinaryTree::new)
    }
}

impl Default for QuadImage {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RecursiveTree<PixelState>> QuadImage<B> {
    /// An all-black image whose trees are all made by `factory`.
    ///
    /// `factory` must return an absent tree.
    pub fn with_factory(factory: fn() -> B) -> Self {
        let mut tree = factory();
        tree.reset_to_leaf(PixelState::Black);
        Self { tree, factory }
    }

    /// Wrap an existing tree.
    ///
    /// The tree must encode an image: every node is either a black or white
    /// leaf or a mixed node with two children, and no split goes below one
    /// pixel. It is canonicalized on the way in.
    pub fn from_tree(mut tree: B, factory: fn() -> B) -> Result<Self, ImageError> {
        validate(&tree, 0)?;
        canonicalize(&mut tree);
        Ok(Self { tree, factory })
    }

    /// Read-only view of the tree.
    pub fn tree(&self) -> &B {
        &self.tree
    }

    /// Take the tree out of the image.
    pub fn into_tree(self) -> B {
        self.tree
    }

    /// The factory this image allocates trees with.
    pub fn factory(&self) -> fn() -> B {
        self.factory
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.tree.size()
    }

    /// A black image sharing this image's factory.
    fn blank(&self) -> Self {
        Self::with_factory(self.factory)
    }

    /// Overwrite this image with a node-by-node copy of `other`.
    ///
    /// The images share no storage afterwards.
    pub fn copy_from_image(&mut self, other: &Self) {
        let mut tree = (self.factory)();
        tree.copy_from(&other.tree);
        self.tree = tree;
    }

    /// Keep a pixel white only where `other` is white too.
    ///
    /// Walks both trees together and stops descending as soon as one side
    /// decides the result for a whole region.
    pub fn intersect_with(&mut self, other: &Self) {
        intersect_nodes(&mut self.tree, &other.tree);
    }

    /// Replace the image with one decoded from `bytes`.
    ///
    /// On error the image is unchanged.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), ImageError> {
        self.tree = codec::decode(bytes, self.factory)?;
        Ok(())
    }

    /// Encode the image in the persisted format.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::to_bytes(&self.tree)
    }

    fn transformed(&self, apply: impl FnOnce(&mut B)) -> Self {
        let mut out = self.clone();
        apply(&mut out.tree);
        out
    }
}

#[cfg(feature = "std")]
impl<B: RecursiveTree<PixelState>> QuadImage<B> {
    /// Replace the image with the one stored in the file at `path`.
    ///
    /// The file must hold exactly one tree. On error the image is unchanged.
    pub fn load(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), ImageError> {
        let bytes = std::fs::read(path)?;
        self.load_bytes(&bytes)
    }

    /// Replace the image with the next tree read from `reader`.
    ///
    /// Reads one byte at a time and stops right after the tree, so wrap
    /// unbuffered sources in a `BufReader`. On error the image is unchanged.
    pub fn load_from<R: std::io::Read>(&mut self, reader: R) -> Result<(), ImageError> {
        self.tree = codec::read_from(reader, self.factory)?;
        Ok(())
    }

    /// Write the image to the file at `path`, replacing its contents.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), ImageError> {
        std::fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Write the image to `writer`.
    pub fn save_to<W: std::io::Write>(&self, writer: W) -> Result<(), ImageError> {
        codec::write_to(&self.tree, writer)
    }
}

impl<B: RecursiveTree<PixelState>> PixelCanvas for QuadImage<B> {
    fn is_pixel_on(&self, x: i32, y: i32) -> Result<bool, ImageError> {
        check_point(x, y)?;
        let mut node = &self.tree;
        let mut region = Region::CANVAS;
        let mut depth = 0;
        while let Some((state, left, right)) = node.node() {
            if state.is_uniform() {
                return Ok(*state == PixelState::White);
            }
            let (first, second) = region.split(depth);
            (node, region) = if first.contains_point(x, y) {
                (left, first)
            } else {
                (right, second)
            };
            depth += 1;
        }
        // Only reachable on a malformed tree; absent regions read as black.
        Ok(false)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) -> Result<(), ImageError> {
        let state = PixelState::from_color(color)?;
        let target = Region::from_xywh(x, y, w, h).intersect(&Region::CANVAS);
        if !target.is_empty() {
            fill_region(&mut self.tree, Region::CANVAS, 0, &target, state);
        }
        Ok(())
    }
}

impl<B: RecursiveTree<PixelState> + 'static> Image for QuadImage<B> {
    fn fill(&mut self, color: u8) -> Result<(), ImageError> {
        let state = PixelState::from_color(color)?;
        self.tree.reset_to_leaf(state);
        Ok(())
    }

    /// Copies the tree when `other` is a `QuadImage<B>`, pixel by pixel otherwise.
    fn affect(&mut self, other: &dyn Image) -> Result<(), ImageError> {
        let any: &dyn Any = other;
        match any.downcast_ref::<Self>() {
            Some(same) => {
                self.copy_from_image(same);
                Ok(())
            }
            None => by_pixel::affect(self, other),
        }
    }

    /// Intersects trees when `other` is a `QuadImage<B>`, pixel by pixel otherwise.
    fn intersection(&mut self, other: &dyn Image) -> Result<(), ImageError> {
        let any: &dyn Any = other;
        match any.downcast_ref::<Self>() {
            Some(same) => {
                self.intersect_with(same);
                Ok(())
            }
            None => by_pixel::intersection(self, other),
        }
    }

    /// Prunes every node whose region misses the diagonal.
    fn test_diagonal(&self) -> bool {
        diagonal_is_white(&self.tree, Region::CANVAS, 0)
    }

    fn copy(&self) -> Self {
        let mut out = self.blank();
        out.copy_from_image(self);
        out
    }

    /// Swaps the children of every node. Halving a region and exchanging the
    /// halves at every level, whatever the axis, turns the whole image around.
    fn rotated180(&self) -> Self {
        self.transformed(|tree| mirror(tree, 0, |_| true))
    }

    fn inverted(&self) -> Self {
        self.transformed(invert)
    }

    /// Swaps children only at odd depths, where regions split left and right.
    fn flipped_horizontal(&self) -> Self {
        self.transformed(|tree| mirror(tree, 0, |depth| depth % 2 == 1))
    }

    /// Computed as `rotated180` followed by `flipped_horizontal`.
    ///
    /// The two passes cancel at odd depths and leave a swap at every even
    /// depth, so the result exchanges top and bottom halves at every scale.
    /// No single-pass tree rotation is used; the composition costs one extra
    /// traversal. Applying it four times, or to a uniform image, gives back
    /// the original.
    fn rotated_clockwise90(&self) -> Self {
        self.rotated180().flipped_horizontal()
    }
}

impl<B: RecursiveTree<PixelState>> Clone for QuadImage<B> {
    fn clone(&self) -> Self {
        let mut tree = (self.factory)();
        tree.copy_from(&self.tree);
        Self {
            tree,
            factory: self.factory,
        }
    }
}

/// Structural equality of the trees; the factories are not compared.
impl<B, O> PartialEq<QuadImage<O>> for QuadImage<B>
where
    B: RecursiveTree<PixelState>,
    O: RecursiveTree<PixelState>,
{
    fn eq(&self, other: &QuadImage<O>) -> bool {
        self.tree.structural_eq(&other.tree)
    }
}

impl<B: RecursiveTree<PixelState>> Eq for QuadImage<B> {}

impl<B: RecursiveTree<PixelState>> Debug for QuadImage<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadImage")
            .field("nodes", &self.tree.size())
            .field("height", &self.tree.height())
            .finish_non_exhaustive()
    }
}

/// State of a leaf, or `None` for absent and inner nodes.
pub(crate) fn leaf_state<B: RecursiveTree<PixelState>>(node: &B) -> Option<PixelState> {
    match node.node() {
        Some((&state, left, right)) if left.is_empty() && right.is_empty() => Some(state),
        _ => None,
    }
}

/// Collapse `node` into a leaf if its children are leaves of the same color.
fn collapse<B: RecursiveTree<PixelState>>(node: &mut B) {
    let merged = match node.node() {
        Some((&PixelState::Mixed, left, right)) => match (leaf_state(left), leaf_state(right)) {
            (Some(a), Some(b)) if a == b && a.is_uniform() => Some(a),
            _ => None,
        },
        _ => None,
    };
    if let Some(state) = merged {
        node.reset_to_leaf(state);
    }
}

/// Collapse every collapsible node, bottom up.
pub(crate) fn canonicalize<B: RecursiveTree<PixelState>>(node: &mut B) {
    if let Some((_, left, right)) = node.node_mut() {
        canonicalize(left);
        canonicalize(right);
    }
    collapse(node);
}

fn validate<B: RecursiveTree<PixelState>>(node: &B, depth: u32) -> Result<(), ImageError> {
    let Some((&state, left, right)) = node.node() else {
        return Err(ImageError::Malformed("absent node where a region is expected"));
    };
    match (state, node.node_type()) {
        (PixelState::Mixed, NodeType::Double) => {
            if depth >= MAX_DEPTH {
                return Err(ImageError::Malformed("split below single-pixel resolution"));
            }
            validate(left, depth + 1)?;
            validate(right, depth + 1)
        }
        (PixelState::Mixed, _) => Err(ImageError::Malformed("mixed node without two children")),
        (_, NodeType::Leaf) => Ok(()),
        _ => Err(ImageError::Malformed("uniform node with children")),
    }
}

fn fill_region<B: RecursiveTree<PixelState>>(
    node: &mut B,
    region: Region,
    depth: u32,
    target: &Region,
    color: PixelState,
) {
    if region.intersect(target).is_empty() {
        return;
    }
    if target.contains(&region) {
        node.reset_to_leaf(color);
        return;
    }
    let Some((state, left, right)) = node.node_mut() else {
        return;
    };
    if *state == color {
        return;
    }
    if state.is_uniform() {
        let old = *state;
        *state = PixelState::Mixed;
        left.reset_to_leaf(old);
        right.reset_to_leaf(old);
    }
    let (first, second) = region.split(depth);
    fill_region(left, first, depth + 1, target, color);
    fill_region(right, second, depth + 1, target, color);
    collapse(node);
}

fn intersect_nodes<B, S>(dst: &mut B, src: &S)
where
    B: RecursiveTree<PixelState>,
    S: RecursiveTree<PixelState>,
{
    let Some((&src_state, src_left, src_right)) = src.node() else {
        dst.reset_to_leaf(PixelState::Black);
        return;
    };
    match src_state {
        PixelState::Black => dst.reset_to_leaf(PixelState::Black),
        PixelState::White => {}
        PixelState::Mixed => match dst.root_value().copied() {
            None => dst.reset_to_leaf(PixelState::Black),
            Some(PixelState::Black) => {}
            Some(PixelState::White) => dst.copy_from(src),
            Some(PixelState::Mixed) => {
                if let Some((_, left, right)) = dst.node_mut() {
                    intersect_nodes(left, src_left);
                    intersect_nodes(right, src_right);
                }
                collapse(dst);
            }
        },
    }
}

/// Swapping children never pairs two equal leaves, so canonical form survives.
fn mirror<B: RecursiveTree<PixelState>>(node: &mut B, depth: u32, swap_at: fn(u32) -> bool) {
    let Some((_, left, right)) = node.node_mut() else {
        return;
    };
    if swap_at(depth) {
        core::mem::swap(left, right);
    }
    mirror(left, depth + 1, swap_at);
    mirror(right, depth + 1, swap_at);
}

fn invert<B: RecursiveTree<PixelState>>(node: &mut B) {
    if let Some((state, left, right)) = node.node_mut() {
        *state = state.inverted();
        invert(left);
        invert(right);
    }
}

fn diagonal_is_white<B: RecursiveTree<PixelState>>(node: &B, region: Region, depth: u32) -> bool {
    if !region.touches_diagonal() {
        return true;
    }
    match node.node() {
        None => false,
        Some((&PixelState::Mixed, left, right)) => {
            let (first, second) = region.split(depth);
            diagonal_is_white(left, first, depth + 1) && diagonal_is_white(right, second, depth + 1)
        }
        Some((&state, _, _)) => state == PixelState::White,
    }
}
