// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test-only image and tree backings.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use quadbit_tree::{RecursiveTree, TreeError};

use crate::by_pixel;
use crate::canvas::{Image, PixelCanvas};
use crate::region::Region;
use crate::types::{CANVAS_SIZE, ImageError, PixelState, check_point};

/// Dense one-bool-per-pixel image, starting all black.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Bitmap {
    bits: Vec<bool>,
}

impl Default for Bitmap {
    fn default() -> Self {
        Self {
            bits: vec![false; (CANVAS_SIZE * CANVAS_SIZE) as usize],
        }
    }
}

impl Bitmap {
    fn index(x: i32, y: i32) -> usize {
        (y * CANVAS_SIZE + x) as usize
    }
}

impl PixelCanvas for Bitmap {
    fn is_pixel_on(&self, x: i32, y: i32) -> Result<bool, ImageError> {
        check_point(x, y)?;
        Ok(self.bits[Self::index(x, y)])
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) -> Result<(), ImageError> {
        let on = PixelState::from_color(color)? == PixelState::White;
        let area = Region::from_xywh(x, y, w, h).intersect(&Region::CANVAS);
        for py in area.min_y..=area.max_y {
            for px in area.min_x..=area.max_x {
                self.bits[Self::index(px, py)] = on;
            }
        }
        Ok(())
    }
}

impl Image for Bitmap {
    fn copy(&self) -> Self {
        self.clone()
    }

    fn rotated180(&self) -> Self {
        by_pixel::remapped(self, |x, y| (255 - x, 255 - y)).expect("map stays on canvas")
    }

    fn inverted(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }

    fn flipped_horizontal(&self) -> Self {
        by_pixel::remapped(self, |x, y| (255 - x, y)).expect("map stays on canvas")
    }

    fn rotated_clockwise90(&self) -> Self {
        self.rotated180().flipped_horizontal()
    }
}

/// Second tree backing: nodes stored as boxed tuples, unrelated to `BinaryTree`.
#[derive(Debug)]
pub(crate) struct TupleTree<T>(Option<Box<(T, TupleTree<T>, TupleTree<T>)>>);

impl<T> Default for TupleTree<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> RecursiveTree<T> for TupleTree<T> {
    fn node(&self) -> Option<(&T, &Self, &Self)> {
        self.0.as_deref().map(|(v, l, r)| (v, l, r))
    }

    fn node_mut(&mut self) -> Option<(&mut T, &mut Self, &mut Self)> {
        self.0.as_deref_mut().map(|(v, l, r)| (v, l, r))
    }

    fn create_root_with_value(&mut self, value: T) -> Result<(), TreeError> {
        if self.0.is_some() {
            return Err(TreeError::OccupiedRoot);
        }
        self.0 = Some(Box::new((value, Self(None), Self(None))));
        Ok(())
    }

    fn remove_root(&mut self) -> Result<T, TreeError> {
        let Some(node) = self.0.take() else {
            return Err(TreeError::AbsentRoot);
        };
        let (value, left, right) = *node;
        match (left.0.is_some(), right.0.is_some()) {
            (true, true) => {
                self.0 = Some(Box::new((value, left, right)));
                return Err(TreeError::DoubleRoot);
            }
            (true, false) => *self = left,
            (false, true) => *self = right,
            (false, false) => {}
        }
        Ok(value)
    }

    fn clear(&mut self) {
        self.0 = None;
    }
}
