// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted form of an image tree.
//!
//! One byte per node in pre-order: `0` for a black leaf, `1` for a white leaf,
//! `2` for a mixed node, which is followed by its left subtree and then its
//! right subtree. Mixed nodes nest at most [`MAX_DEPTH`] levels deep.
//!
//! ```text
//! top-left quadrant white:  02 02 01 00 00
//! ```
//!
//! Decoding is strict: unknown tags, splits below one pixel and truncated input
//! are errors, and so are bytes left after the tree when decoding a slice. A
//! mixed node with two leaf children of the same color is rejected too, so that
//! every image has exactly one encoding and re-encoding a decoded tree gives
//! back the same bytes.

use alloc::vec::Vec;

use quadbit_tree::RecursiveTree;

use crate::quad_image::leaf_state;
use crate::types::{DecodeError, ImageError, MAX_DEPTH, PixelState};

/// Append the encoding of `tree` to `out`.
///
/// An absent tree encodes to nothing.
pub fn encode<B: RecursiveTree<PixelState>>(tree: &B, out: &mut Vec<u8>) {
    out.extend(tree.pre_order().map(|state| state.tag()));
}

/// Encode `tree` into a fresh buffer.
pub fn to_bytes<B: RecursiveTree<PixelState>>(tree: &B) -> Vec<u8> {
    let mut out = Vec::new();
    encode(tree, &mut out);
    out
}

/// Decode exactly one tree from `bytes`, building nodes with `factory`.
pub fn decode<B: RecursiveTree<PixelState>>(
    bytes: &[u8],
    factory: fn() -> B,
) -> Result<B, ImageError> {
    let mut tags = bytes.iter();
    let tree = read_tree(&mut tags, factory)?;
    match tags.len() {
        0 => Ok(tree),
        rest => Err(DecodeError::TrailingBytes(rest).into()),
    }
}

/// Read one tree from `reader`, leaving any following bytes unread.
#[cfg(feature = "std")]
pub fn read_from<B, R>(reader: R, factory: fn() -> B) -> Result<B, ImageError>
where
    B: RecursiveTree<PixelState>,
    R: std::io::Read,
{
    read_tree(&mut StreamTags(reader), factory)
}

/// Write the encoding of `tree` to `writer`.
#[cfg(feature = "std")]
pub fn write_to<B, W>(tree: &B, mut writer: W) -> Result<(), ImageError>
where
    B: RecursiveTree<PixelState>,
    W: std::io::Write,
{
    use byteorder::WriteBytesExt;

    for state in tree.pre_order() {
        writer.write_u8(state.tag())?;
    }
    writer.flush()?;
    Ok(())
}

/// Where tags come from; `Ok(None)` is a clean end of input.
trait TagSource {
    fn next_tag(&mut self) -> Result<Option<u8>, ImageError>;
}

impl TagSource for core::slice::Iter<'_, u8> {
    fn next_tag(&mut self) -> Result<Option<u8>, ImageError> {
        Ok(self.next().copied())
    }
}

#[cfg(feature = "std")]
struct StreamTags<R>(R);

#[cfg(feature = "std")]
impl<R: std::io::Read> TagSource for StreamTags<R> {
    fn next_tag(&mut self) -> Result<Option<u8>, ImageError> {
        use byteorder::ReadBytesExt;

        match self.0.read_u8() {
            Ok(tag) => Ok(Some(tag)),
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

fn read_tree<B, S>(source: &mut S, factory: fn() -> B) -> Result<B, ImageError>
where
    B: RecursiveTree<PixelState>,
    S: TagSource,
{
    let Some(tag) = source.next_tag()? else {
        return Err(DecodeError::Empty.into());
    };
    let mut tree = factory();
    read_node(source, &mut tree, tag, 0)?;
    Ok(tree)
}

fn read_node<B, S>(source: &mut S, node: &mut B, tag: u8, depth: u32) -> Result<(), ImageError>
where
    B: RecursiveTree<PixelState>,
    S: TagSource,
{
    let state = PixelState::try_from(tag)?;
    node.reset_to_leaf(state);
    if state != PixelState::Mixed {
        return Ok(());
    }
    if depth >= MAX_DEPTH {
        return Err(DecodeError::TooDeep.into());
    }
    if let Some((_, left, right)) = node.node_mut() {
        for child in [&mut *left, &mut *right] {
            let tag = source.next_tag()?.ok_or(DecodeError::Truncated)?;
            read_node(source, child, tag, depth + 1)?;
        }
        if let (Some(a), Some(b)) = (leaf_state(left), leaf_state(right)) {
            if a == b {
                return Err(DecodeError::NonCanonical.into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Image, PixelCanvas};
    use crate::quad_image::QuadImage;
    use crate::test_util::TupleTree;
    use alloc::vec;
    use quadbit_tree::BinaryTree;

    fn decode_boxed(bytes: &[u8]) -> Result<BinaryTree<PixelState>, ImageError> {
        decode(bytes, BinaryTree::new)
    }

    /// A mixed node per level down the top edge, ending at pixel (0, 0).
    fn single_pixel_bytes() -> Vec<u8> {
        let mut bytes = vec![];
        for _ in 0..MAX_DEPTH {
            bytes.push(2);
        }
        bytes.push(1);
        bytes.extend(core::iter::repeat_n(0, MAX_DEPTH as usize));
        bytes
    }

    #[test]
    fn uniform_images_are_one_byte() {
        let mut img = QuadImage::new();
        assert_eq!(img.to_bytes(), vec![0]);
        img.fill(1).unwrap();
        assert_eq!(img.to_bytes(), vec![1]);
    }

    #[test]
    fn reference_layouts() {
        let mut img = QuadImage::new();
        img.fill_rect(0, 128, 256, 128, 1).unwrap();
        assert_eq!(img.to_bytes(), vec![2, 0, 1]);

        let mut img = QuadImage::new();
        img.fill_rect(128, 0, 128, 256, 1).unwrap();
        assert_eq!(img.to_bytes(), vec![2, 2, 0, 1, 2, 0, 1]);

        let mut img = QuadImage::new();
        img.draw_pixel(0, 0, 1).unwrap();
        assert_eq!(img.to_bytes(), single_pixel_bytes());
    }

    #[test]
    fn decode_reads_what_encode_writes() {
        let mut img = QuadImage::new();
        img.fill_rect(13, 40, 100, 7, 1).unwrap();
        img.draw_line(0, 255, 255, 0, 1).unwrap();
        let bytes = img.to_bytes();
        let tree = decode_boxed(&bytes).unwrap();
        assert_eq!(to_bytes(&tree), bytes);
        assert_eq!(&tree, img.tree());
    }

    #[test]
    fn redundant_splits_are_rejected() {
        for bytes in [&[2, 1, 1][..], &[2, 0, 0], &[2, 2, 1, 0, 2, 0, 0], &[2, 0, 2, 1, 1]] {
            assert!(
                matches!(
                    decode_boxed(bytes),
                    Err(ImageError::Decode(DecodeError::NonCanonical))
                ),
                "{bytes:?}"
            );
        }

        let mut img = QuadImage::new();
        img.fill(1).unwrap();
        assert!(img.load_bytes(&[2, 1, 1]).is_err());
        assert_eq!(img.to_bytes(), vec![1]);
    }

    #[test]
    fn reencoding_gives_back_the_input() {
        for bytes in [&[0][..], &[2, 0, 1], &[2, 2, 1, 0, 0], &[2, 2, 0, 1, 2, 0, 1]] {
            let mut img = QuadImage::new();
            img.load_bytes(bytes).unwrap();
            assert_eq!(img.to_bytes(), bytes);
        }
        let pixel = single_pixel_bytes();
        assert_eq!(to_bytes(&decode_boxed(&pixel).unwrap()), pixel);
    }

    #[test]
    fn malformed_input_is_rejected() {
        let err = |bytes: &[u8]| match decode_boxed(bytes) {
            Err(ImageError::Decode(err)) => err,
            other => panic!("expected a decode error, got {other:?}"),
        };
        assert_eq!(err(&[]), DecodeError::Empty);
        assert_eq!(err(&[2, 1]), DecodeError::Truncated);
        assert_eq!(err(&[2]), DecodeError::Truncated);
        assert_eq!(err(&[3]), DecodeError::UnknownTag(3));
        assert_eq!(err(&[2, 0, 9]), DecodeError::UnknownTag(9));
        assert_eq!(err(&[1, 0, 0]), DecodeError::TrailingBytes(2));

        let mut too_deep = single_pixel_bytes();
        too_deep[MAX_DEPTH as usize] = 2;
        assert_eq!(err(&too_deep), DecodeError::TooDeep);
    }

    #[test]
    fn decoding_uses_the_factory() {
        let tree: TupleTree<PixelState> = decode(&[2, 2, 1, 0, 0], TupleTree::default).unwrap();
        assert_eq!(to_bytes(&tree), vec![2, 2, 1, 0, 0]);
    }

    #[test]
    fn failed_load_leaves_image_unchanged() {
        let mut img = QuadImage::new();
        img.fill_rect(0, 0, 128, 128, 1).unwrap();
        let before = img.to_bytes();
        assert!(img.load_bytes(&[2, 0]).is_err());
        assert!(img.load_bytes(&[7]).is_err());
        assert_eq!(img.to_bytes(), before);
        img.load_bytes(&[1]).unwrap();
        assert!(img.is_pixel_on(200, 200).unwrap());
    }

    #[cfg(feature = "std")]
    #[test]
    fn streams_stop_after_one_tree() {
        let mut a = QuadImage::new();
        a.fill_rect(0, 0, 128, 128, 1).unwrap();
        let b = a.inverted();

        let mut buf = Vec::new();
        a.save_to(&mut buf).unwrap();
        b.save_to(&mut buf).unwrap();

        let mut reader = std::io::Cursor::new(buf);
        let mut first = QuadImage::new();
        first.load_from(&mut reader).unwrap();
        let mut second = QuadImage::new();
        second.load_from(&mut reader).unwrap();
        assert_eq!(first, a);
        assert_eq!(second, b);

        let mut third = QuadImage::new();
        assert!(matches!(
            third.load_from(&mut reader),
            Err(ImageError::Decode(DecodeError::Empty))
        ));
        assert_eq!(third, QuadImage::new());
    }

    #[cfg(feature = "std")]
    #[test]
    fn truncated_stream_is_an_error() {
        let mut img = QuadImage::new();
        let err = img.load_from(&[2u8, 2, 1][..]).unwrap_err();
        assert!(matches!(err, ImageError::Decode(DecodeError::Truncated)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn files_round_trip() {
        let path = std::env::temp_dir().join(alloc::format!(
            "quadbit-codec-{}.tree",
            std::process::id()
        ));
        let mut img = QuadImage::new();
        img.fill_rect(30, 60, 90, 120, 1).unwrap();
        img.save(&path).unwrap();

        let mut loaded = QuadImage::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded, img);

        std::fs::write(&path, [1u8, 0]).unwrap();
        assert!(matches!(
            loaded.load(&path),
            Err(ImageError::Decode(DecodeError::TrailingBytes(1)))
        ));
        assert_eq!(loaded, img);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(loaded.load(&path), Err(ImageError::Io(_))));
    }
}
