//! Palette Benchmarks
//!
//! Cache lookups, blends and gradient sampling.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pigment_core::{Fill, Gradient, LinearFill, Palette, Point};

fn generate_rgb_values(count: usize) -> Vec<[i32; 3]> {
    (0..count)
        .map(|i| {
            [
                ((i * 37) % 256) as i32,
                ((i * 59) % 256) as i32,
                ((i * 83) % 256) as i32,
            ]
        })
        .collect()
}

// ============================================================================
// Cache Benchmarks
// ============================================================================

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");

    let palette = Palette::rgb();

    group.bench_function("hit", |b| {
        b.iter(|| palette.color(black_box(&[12, 123, 245])).unwrap())
    });

    for count in [64usize, 4096] {
        let values = generate_rgb_values(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("fill", count), &values, |b, values| {
            b.iter(|| {
                let palette = Palette::rgb();
                for v in values {
                    black_box(palette.color(v).unwrap());
                }
            })
        });
    }

    group.finish();
}

// ============================================================================
// Blend Benchmarks
// ============================================================================

fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    let rgb = Palette::rgb();
    let black = rgb.color(&[0, 0, 0]).unwrap();
    let white = rgb.color(&[255, 255, 255]).unwrap();
    group.bench_function("rgb", |b| {
        b.iter(|| rgb.blend(&black, &white, black_box(0.37)).unwrap())
    });

    let cmyk = Palette::cmyk();
    let cyan = cmyk.color(&[100, 0, 0, 0]).unwrap();
    let key = cmyk.color(&[0, 0, 0, 100]).unwrap();
    group.bench_function("cmyk", |b| {
        b.iter(|| cmyk.blend(&cyan, &key, black_box(0.37)).unwrap())
    });

    group.finish();
}

// ============================================================================
// Gradient Benchmarks
// ============================================================================

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    let palette = Palette::rgb();
    let gradient = Gradient::new(
        &palette,
        palette.color(&[12, 123, 245]).unwrap(),
        palette.color(&[245, 12, 123]).unwrap(),
    )
    .unwrap();

    for n in [16usize, 256] {
        group.throughput(Throughput::Elements(n as u64 + 1));
        group.bench_with_input(BenchmarkId::new("steps", n), &n, |b, &n| {
            b.iter(|| gradient.steps(n).count())
        });
    }

    let fill = LinearFill::vertical(gradient.clone(), 512);
    group.throughput(Throughput::Elements(512));
    group.bench_function("vertical_fill_column", |b| {
        b.iter(|| {
            for y in 0..512 {
                black_box(fill.color_at(Point::new(0, y)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_cache, bench_blend, bench_gradient);
criterion_main!(benches);
