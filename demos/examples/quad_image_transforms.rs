// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image transforms and persistence.
//!
//! Applies each transform to an asymmetric image, checks the involutions, and
//! saves and reloads the result through a temporary file.
//!
//! Run:
//! - `cargo run -p quadbit_demos --example quad_image_transforms`

use quadbit_image::{Image, PixelCanvas, QuadImage};

fn corner(img: &QuadImage) -> &'static str {
    let on = |x, y| img.is_pixel_on(x, y).unwrap_or(false);
    match (on(0, 0), on(255, 0), on(0, 255), on(255, 255)) {
        (true, false, false, false) => "top-left",
        (false, true, false, false) => "top-right",
        (false, false, true, false) => "bottom-left",
        (false, false, false, true) => "bottom-right",
        _ => "other",
    }
}

fn main() -> Result<(), quadbit_image::ImageError> {
    let mut img = QuadImage::new();
    img.fill_rect(0, 0, 40, 40, 1)?;

    println!("original:            {}", corner(&img));
    println!("rotated180:          {}", corner(&img.rotated180()));
    println!("flipped_horizontal:  {}", corner(&img.flipped_horizontal()));
    println!("rotated_clockwise90: {}", corner(&img.rotated_clockwise90()));
    println!("inverted corner on:  {}", img.inverted().is_pixel_on(0, 0)?);

    assert_eq!(img.rotated180().rotated180(), img);
    assert_eq!(img.flipped_horizontal().flipped_horizontal(), img);
    assert_eq!(img.inverted().inverted(), img);

    let path = std::env::temp_dir().join("quadbit_demo.tree");
    img.rotated_clockwise90().save(&path)?;
    let mut loaded = QuadImage::new();
    loaded.load(&path)?;
    println!("reloaded:            {}", corner(&loaded));
    std::fs::remove_file(&path)?;
    Ok(())
}
