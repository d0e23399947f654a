// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel states, canvas constants, and errors.

/// Width and height of every image, in pixels.
pub const CANVAS_SIZE: i32 = 256;

/// Depth at which a node covers a single pixel.
///
/// Each level halves one axis, so a 256×256 canvas bottoms out after
/// 8 vertical and 8 horizontal splits.
pub const MAX_DEPTH: u32 = 16;

/// Value stored in every node of an image tree.
///
/// `Black` and `White` are only valid on leaves; `Mixed` is only valid on a node
/// with two present children. The discriminant is the persisted tag byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelState {
    /// Uniformly black region (color `0`).
    Black = 0,
    /// Uniformly white region (color `1`).
    White = 1,
    /// Region split into two children.
    Mixed = 2,
}

impl PixelState {
    /// The uniform state for a drawing color: `0` is black, `1` is white.
    pub fn from_color(color: u8) -> Result<Self, ImageError> {
        match color {
            0 => Ok(Self::Black),
            1 => Ok(Self::White),
            other => Err(ImageError::InvalidColor(other)),
        }
    }

    /// Persisted tag byte.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Swap black and white. `Mixed` is unchanged.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Mixed => Self::Mixed,
        }
    }

    /// True for `Black` and `White`.
    pub const fn is_uniform(self) -> bool {
        !matches!(self, Self::Mixed)
    }
}

impl TryFrom<u8> for PixelState {
    type Error = DecodeError;

    fn try_from(tag: u8) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(Self::Black),
            1 => Ok(Self::White),
            2 => Ok(Self::Mixed),
            other => Err(DecodeError::UnknownTag(other)),
        }
    }
}

impl core::fmt::Display for PixelState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Errors reported by image operations.
///
/// An operation that returns an error has no effect on the image.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImageError {
    /// A drawing color other than `0` or `1`.
    #[error("color must be 0 or 1, got {0}")]
    InvalidColor(u8),
    /// A pixel coordinate outside `0..256`.
    #[error("pixel ({x}, {y}) lies outside the 256x256 canvas")]
    OutOfCanvas {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// A caller-supplied tree does not encode an image.
    #[error("malformed image tree: {0}")]
    Malformed(&'static str),
    /// Persisted data could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Reading or writing a file or stream failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a persisted tree is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// No bytes at all; an image always has a root.
    #[error("no image data")]
    Empty,
    /// Input ended before the tree was complete.
    #[error("data ends in the middle of the tree")]
    Truncated,
    /// A byte that is not a node tag.
    #[error("unknown node tag {0}")]
    UnknownTag(u8),
    /// A split below single-pixel resolution.
    #[error("tree splits deeper than a single pixel")]
    TooDeep,
    /// A mixed node whose children are leaves of the same color.
    ///
    /// Every image has exactly one encoding, where such a pair is written as a
    /// single leaf.
    #[error("mixed node with two equal leaves")]
    NonCanonical,
    /// Bytes left over after a complete tree.
    #[error("{0} trailing bytes after the tree")]
    TrailingBytes(usize),
}

/// Fail with [`ImageError::OutOfCanvas`] unless `(x, y)` is a canvas pixel.
pub(crate) fn check_point(x: i32, y: i32) -> Result<(), ImageError> {
    if x < 0 || y < 0 || x >= CANVAS_SIZE || y >= CANVAS_SIZE {
        return Err(ImageError::OutOfCanvas { x, y });
    }
    Ok(())
}
