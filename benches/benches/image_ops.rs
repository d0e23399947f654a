// Copyright 2025 the Quadbit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadbit_image::{Image, PixelCanvas, QuadImage, by_pixel};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, bound: i32) -> i32 {
        (self.next_u64() % bound as u64) as i32
    }
}

/// `count` random rectangles of alternating color.
fn gen_random_image(count: usize, max_side: i32, seed: u64) -> QuadImage {
    let mut rng = Rng::new(seed);
    let mut img = QuadImage::new();
    for i in 0..count {
        let (x, y) = (rng.below(256), rng.below(256));
        let (w, h) = (1 + rng.below(max_side), 1 + rng.below(max_side));
        img.fill_rect(x, y, w, h, (i % 2) as u8).unwrap();
    }
    img
}

/// Every other pixel white: the largest possible tree.
fn checkerboard() -> QuadImage {
    let mut img = QuadImage::new();
    for y in 0..256 {
        for x in (y % 2..256).step_by(2) {
            img.draw_pixel(x, y, 1).unwrap();
        }
    }
    img
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_rect");
    for &count in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_rects_n{}", count), |b| {
            b.iter(|| black_box(gen_random_image(count, 64, 0xCAFE_F00D_DEAD_BEEF)))
        });
    }
    group.bench_function("single_pixels_row", |b| {
        b.iter_batched(
            QuadImage::new,
            |mut img| {
                for x in 0..256 {
                    img.draw_pixel(x, 77, 1).unwrap();
                }
                black_box(img);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let inputs = [
        ("random", gen_random_image(512, 48, 0xBADC_F00D_1234_5678)),
        ("checker", checkerboard()),
    ];
    for (name, img) in &inputs {
        group.bench_function(format!("copy_{name}"), |b| b.iter(|| black_box(img.copy())));
        group.bench_function(format!("rotated180_{name}"), |b| {
            b.iter(|| black_box(img.rotated180()))
        });
        group.bench_function(format!("inverted_{name}"), |b| {
            b.iter(|| black_box(img.inverted()))
        });
        group.bench_function(format!("flipped_horizontal_{name}"), |b| {
            b.iter(|| black_box(img.flipped_horizontal()))
        });
        group.bench_function(format!("rotated_clockwise90_{name}"), |b| {
            b.iter(|| black_box(img.rotated_clockwise90()))
        });
    }
    group.finish();
}

fn bench_tree_vs_pixels(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_vs_pixels");
    let a = gen_random_image(512, 48, 0xC1A5_7E55_9999_ABCD);
    let b_img = gen_random_image(512, 48, 0xFACE_FEED_CAFE_BABE);

    group.bench_function("intersection_tree", |b| {
        b.iter_batched(
            || a.copy(),
            |mut img| {
                img.intersection(&b_img).unwrap();
                black_box(img);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("intersection_by_pixel", |b| {
        b.iter_batched(
            || a.copy(),
            |mut img| {
                by_pixel::intersection(&mut img, &b_img).unwrap();
                black_box(img);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("test_diagonal_tree", |b| {
        b.iter(|| black_box(a.test_diagonal()))
    });
    group.bench_function("test_diagonal_by_pixel", |b| {
        b.iter(|| black_box(by_pixel::test_diagonal(&a)))
    });
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let img = gen_random_image(1024, 32, 0x5EED_0000_1111_2222);
    let bytes = img.to_bytes();
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("encode", |b| b.iter(|| black_box(img.to_bytes())));
    group.bench_function("decode", |b| {
        b.iter_batched(
            QuadImage::new,
            |mut out| {
                out.load_bytes(&bytes).unwrap();
                black_box(out);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_fill,
    bench_transforms,
    bench_tree_vs_pixels,
    bench_codec
);
criterion_main!(benches);
