// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image basics.
//!
//! Draws rectangles, a line and a disc, prints a coarse preview and the tree
//! encoding, and intersects two images.
//!
//! Run:
//! - `cargo run -p quadbit_demos --example quad_image_basics`

use kurbo::Circle;
use quadbit_image::{Image, PixelCanvas, QuadImage};

/// One character per 8×8 block: `#` all white, `.` all black, `+` mixed.
fn preview(img: &QuadImage) -> String {
    let mut out = String::new();
    for by in (0..256).step_by(8) {
        for bx in (0..256).step_by(8) {
            let mut on = 0;
            for y in by..by + 8 {
                for x in bx..bx + 8 {
                    if img.is_pixel_on(x, y).unwrap_or(false) {
                        on += 1;
                    }
                }
            }
            out.push(match on {
                0 => '.',
                64 => '#',
                _ => '+',
            });
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut img = QuadImage::new();
    img.fill_rect(0, 0, 128, 128, 1).unwrap();
    println!("quadrant bytes: {:?}", img.to_bytes());

    img.fill_rect(160, 24, 64, 40, 1).unwrap();
    img.draw_line(0, 255, 255, 0, 1).unwrap();
    img.fill_shape(&Circle::new((190.0, 190.0), 40.0), 1).unwrap();
    img.draw_rect(20, 150, 80, 80, 1).unwrap();
    println!("{}", preview(&img));
    println!("{img:?}, {} bytes encoded", img.to_bytes().len());

    let mut mask = QuadImage::new();
    mask.fill_rect(0, 0, 256, 128, 1).unwrap();
    let mut top = img.copy();
    top.intersection(&mask).unwrap();
    println!("top half only:\n{}", preview(&top));
    println!("diagonal all white: {}", img.test_diagonal());
}
