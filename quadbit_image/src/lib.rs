// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadbit Image: 256×256 monochrome images stored as binary space partition trees.
//!
//! A [`QuadImage`] keeps its pixels in a binary tree from `quadbit_tree`. The
//! root covers the whole canvas; each mixed node halves its region, top and
//! bottom at even depths and left and right at odd depths, and every leaf is
//! uniformly black or white. Large uniform areas cost a single node.
//!
//! - Pixel access and rectangle filling through [`PixelCanvas`], plus line,
//!   outline and [`kurbo::Shape`] drawing built on top of them.
//! - Whole-image operations through [`Image`]: copy, fill, affect,
//!   intersection, the mirror and rotation transforms, and the diagonal test.
//!   All of them work on the tree directly.
//! - A compact pre-order byte encoding in [`codec`], with file and stream
//!   persistence under the `std` feature.
//!
//! Images of different representations can be combined: the combining
//! operations take any `&dyn Image` and fall back to the pixel loops in
//! [`by_pixel`] when the argument is not a [`QuadImage`] of the same backing.
//!
//! # Example
//!
//! ```rust
//! use quadbit_image::{Image, PixelCanvas, QuadImage};
//!
//! let mut img = QuadImage::new();
//! img.fill_rect(0, 0, 128, 128, 1).unwrap();
//! assert!(img.is_pixel_on(0, 0).unwrap());
//! assert!(!img.is_pixel_on(200, 200).unwrap());
//!
//! // One mixed root, one mixed top half, three leaves.
//! assert_eq!(img.to_bytes(), [2, 2, 1, 0, 0]);
//!
//! let mut other = QuadImage::new();
//! other.fill(1).unwrap();
//! other.intersection(&img).unwrap();
//! assert_eq!(other, img);
//!
//! assert_eq!(img.rotated180().rotated180(), img);
//! assert!(!img.inverted().is_pixel_on(0, 0).unwrap());
//! ```
//!
//! ## Custom backings
//!
//! [`QuadImage`] is generic over its tree type. Any [`RecursiveTree`] of
//! [`PixelState`] works; pass a factory returning empty trees to
//! [`QuadImage::with_factory`] and every image derived from it is built with
//! the same factory.
//!
//! [`RecursiveTree`]: quadbit_tree::RecursiveTree
//!
//! ## Features
//!
//! - `std` (default): file and stream persistence; forwards to Kurbo.
//! - `libm`: Kurbo's float support for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`. The minimum supported Rust version
//! is 1.88.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod by_pixel;
pub mod canvas;
pub mod codec;
pub mod quad_image;
pub mod region;
pub mod types;

#[cfg(test)]
mod test_util;

pub use canvas::{Image, PixelCanvas};
pub use quad_image::QuadImage;
pub use region::{Region, Split};
pub use types::{CANVAS_SIZE, DecodeError, ImageError, MAX_DEPTH, PixelState};
