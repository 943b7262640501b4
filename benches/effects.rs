//! Benchmarks for the effect engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use spritefx::{Colour, Corrosion, Glow, Growth, Spritesheet};

/// A 64x64 sprite: a filled diamond with a notch, on a clear background.
fn sprite() -> RgbaImage {
    RgbaImage::from_fn(64, 64, |x, y| {
        let d = (x as i32 - 32).abs() + (y as i32 - 32).abs();
        if d < 24 && !(x > 28 && x < 36 && y < 32) {
            Rgba([120, 80, 40, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects");
    let layer = sprite();
    let from = Colour::rgb(255, 228, 92);
    let to = Colour::rgb(184, 38, 11);

    group.bench_function("flame_64", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| Growth::flame().apply(black_box(&layer), from, to, &mut rng))
    });

    group.bench_function("drip_64", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| Growth::drip().apply(black_box(&layer), from, to, &mut rng))
    });

    group.bench_function("glow_64", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| Glow::default().apply(black_box(&layer), from, to, &mut rng))
    });

    group.bench_function("corrosion_64", |b| {
        let mut rng = StdRng::seed_from_u64(4);
        let corrosion = Corrosion {
            iterations: 16,
            seeds: 8,
            ..Corrosion::new(Colour::rgb(78, 122, 39))
        };
        b.iter(|| corrosion.apply(black_box(&layer), &mut rng))
    });

    group.finish();
}

fn bench_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet");

    // 16x16 grid of 16px tiles
    let image = RgbaImage::from_fn(256, 256, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    let sheet = Spritesheet::from_image(image, 16).unwrap();

    group.bench_function("tiles_256", |b| {
        b.iter(|| black_box(&sheet).tiles().count())
    });

    group.finish();
}

criterion_group!(benches, bench_effects, bench_sheet);
criterion_main!(benches);
