// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits shared by every image representation.
//!
//! [`PixelCanvas`] is the pixel-level set: query one pixel, fill a rectangle.
//! [`Image`] is the whole-image set. Its combining operations take any other
//! `&dyn Image` and default to the pixel loops in [`by_pixel`](crate::by_pixel);
//! an implementation overrides them with a fast path for arguments of its own
//! concrete type and falls back to the defaults otherwise.

use core::any::Any;

use kurbo::{Point, Shape};

use crate::by_pixel;
use crate::region::Region;
use crate::types::{CANVAS_SIZE, ImageError, PixelState, check_point};

/// Per-pixel access to a 256×256 monochrome image.
///
/// Colors are `0` (black) and `1` (white); anything else is rejected with
/// [`ImageError::InvalidColor`].
pub trait PixelCanvas {
    /// Whether the pixel at `(x, y)` is white.
    ///
    /// Fails with [`ImageError::OutOfCanvas`] outside `0..256` on either axis.
    fn is_pixel_on(&self, x: i32, y: i32) -> Result<bool, ImageError>;

    /// Paint the `w`×`h` rectangle whose top-left pixel is `(x, y)`.
    ///
    /// The rectangle is clipped to the canvas; an empty or fully off-canvas
    /// rectangle changes nothing.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) -> Result<(), ImageError>;

    /// Paint a single pixel.
    fn draw_pixel(&mut self, x: i32, y: i32, color: u8) -> Result<(), ImageError> {
        check_point(x, y)?;
        self.fill_rect(x, y, 1, 1, color)
    }

    /// Paint the segment from `(x0, y0)` to `(x1, y1)`, both ends included.
    ///
    /// A segment reaching off the canvas is first clipped to it, so only the
    /// visible part is walked.
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u8,
    ) -> Result<(), ImageError> {
        PixelState::from_color(color)?;
        let Some((x0, y0, x1, y1)) = clip_segment(x0, y0, x1, y1) else {
            return Ok(());
        };
        let (dx, dy) = ((x1 - x0).abs(), -(y1 - y0).abs());
        let (sx, sy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let (mut x, mut y, mut err) = (x0, y0, dx + dy);
        loop {
            if Region::CANVAS.contains_point(x, y) {
                self.draw_pixel(x, y, color)?;
            }
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Paint the one-pixel outline of the `w`×`h` rectangle at `(x, y)`.
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) -> Result<(), ImageError> {
        PixelState::from_color(color)?;
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        self.fill_rect(x, y, w, 1, color)?;
        self.fill_rect(x, y.saturating_add(h - 1), w, 1, color)?;
        self.fill_rect(x, y, 1, h, color)?;
        self.fill_rect(x.saturating_add(w - 1), y, 1, h, color)
    }

    /// Paint every canvas pixel whose centre lies inside `shape`.
    fn fill_shape<S: Shape>(&mut self, shape: &S, color: u8) -> Result<(), ImageError>
    where
        Self: Sized,
    {
        PixelState::from_color(color)?;
        let bbox = shape.bounding_box();
        let limit = f64::from(CANVAS_SIZE);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Coordinates are clamped to just around the canvas before the cast."
        )]
        let to_px = |v: f64| v.clamp(-1.0, limit) as i32;
        let area = Region::new(
            to_px(bbox.x0) - 1,
            to_px(bbox.y0) - 1,
            to_px(bbox.x1) + 1,
            to_px(bbox.y1) + 1,
        )
        .intersect(&Region::CANVAS);
        for y in area.min_y..=area.max_y {
            for x in area.min_x..=area.max_x {
                let centre = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if shape.contains(centre) {
                    self.draw_pixel(x, y, color)?;
                }
            }
        }
        Ok(())
    }
}

/// Whole-image operations.
///
/// Transforms return a new image and leave `self` untouched. Combining
/// operations mutate `self` in place and leave the argument untouched.
pub trait Image: PixelCanvas + Any {
    /// Paint the whole canvas with `color`.
    fn fill(&mut self, color: u8) -> Result<(), ImageError> {
        self.fill_rect(0, 0, CANVAS_SIZE, CANVAS_SIZE, color)
    }

    /// Make `self` a copy of `other`.
    fn affect(&mut self, other: &dyn Image) -> Result<(), ImageError> {
        by_pixel::affect(self, other)
    }

    /// Keep a pixel white only where `other` is white too; black wins.
    fn intersection(&mut self, other: &dyn Image) -> Result<(), ImageError> {
        by_pixel::intersection(self, other)
    }

    /// True if every pixel `(i, i)` of the main diagonal is white.
    fn test_diagonal(&self) -> bool {
        by_pixel::test_diagonal(self)
    }

    /// An independent copy.
    fn copy(&self) -> Self
    where
        Self: Sized;

    /// The image turned half a turn.
    fn rotated180(&self) -> Self
    where
        Self: Sized;

    /// The image with black and white swapped.
    fn inverted(&self) -> Self
    where
        Self: Sized;

    /// The image mirrored left to right.
    fn flipped_horizontal(&self) -> Self
    where
        Self: Sized;

    /// The image after the quarter-turn transform (see implementations).
    fn rotated_clockwise90(&self) -> Self
    where
        Self: Sized;
}

/// Clip a segment to the canvas, each pixel being a unit square around its
/// centre. Returns the rounded endpoints of the visible part, if any.
///
/// A segment with both ends on the canvas comes back unchanged.
fn clip_segment(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
    let (fx0, fy0) = (f64::from(x0), f64::from(y0));
    let (dx, dy) = (f64::from(x1) - fx0, f64::from(y1) - fy0);
    let (lo, hi) = (-0.5, f64::from(CANVAS_SIZE) - 0.5);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, fx0 - lo), (dx, hi - fx0), (-dy, fy0 - lo), (dy, hi - fy0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Clipped coordinates lie within half a pixel of the canvas."
    )]
    let to_px = |v: f64| ((v.clamp(lo, hi) + 0.5) as i32).min(CANVAS_SIZE - 1);
    Some((
        to_px(fx0 + t0 * dx),
        to_px(fy0 + t0 * dy),
        to_px(fx0 + t1 * dx),
        to_px(fy0 + t1 * dy),
    ))
}
