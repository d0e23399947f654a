// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic pixel-loop algorithms.
//!
//! These work for any pair of images, whatever their storage, by visiting all
//! 65 536 pixels through [`PixelCanvas`]. They are the defaults behind
//! [`Image`]'s combining operations and the fallback path when an image is
//! combined with a different representation.

use crate::canvas::{Image, PixelCanvas};
use crate::types::{CANVAS_SIZE, ImageError};

fn pixels() -> impl Iterator<Item = (i32, i32)> {
    (0..CANVAS_SIZE).flat_map(|y| (0..CANVAS_SIZE).map(move |x| (x, y)))
}

/// Copy every pixel of `src` into `dst`.
pub fn affect<D: PixelCanvas + ?Sized>(dst: &mut D, src: &dyn Image) -> Result<(), ImageError> {
    for (x, y) in pixels() {
        let on = src.is_pixel_on(x, y)?;
        dst.draw_pixel(x, y, u8::from(on))?;
    }
    Ok(())
}

/// Turn black every pixel of `dst` that is black in `src`.
pub fn intersection<D: PixelCanvas + ?Sized>(
    dst: &mut D,
    src: &dyn Image,
) -> Result<(), ImageError> {
    for (x, y) in pixels() {
        if !src.is_pixel_on(x, y)? && dst.is_pixel_on(x, y)? {
            dst.draw_pixel(x, y, 0)?;
        }
    }
    Ok(())
}

/// True if every pixel `(i, i)` is white.
pub fn test_diagonal<I: PixelCanvas + ?Sized>(image: &I) -> bool {
    (0..CANVAS_SIZE).all(|i| matches!(image.is_pixel_on(i, i), Ok(true)))
}

/// True if both images hold the same pixels, whatever their storage.
pub fn same_pixels(a: &dyn Image, b: &dyn Image) -> bool {
    pixels().all(|(x, y)| match (a.is_pixel_on(x, y), b.is_pixel_on(x, y)) {
        (Ok(p), Ok(q)) => p == q,
        _ => false,
    })
}

/// Build a new image whose pixel `map(x, y)` takes the value of `src`'s `(x, y)`.
///
/// `map` must send the canvas onto itself; pixels mapped off the canvas are
/// reported as [`ImageError::OutOfCanvas`].
pub fn remapped<I, F>(src: &I, map: F) -> Result<I, ImageError>
where
    I: Image + Default,
    F: Fn(i32, i32) -> (i32, i32),
{
    let mut out = I::default();
    out.fill(0)?;
    for (x, y) in pixels() {
        if src.is_pixel_on(x, y)? {
            let (tx, ty) = map(x, y);
            out.draw_pixel(tx, ty, 1)?;
        }
    }
    Ok(out)
}
