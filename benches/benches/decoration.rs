// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::BezPath;
use peniko::Color;
use tracery_decoration::{ColorMode, ColorSequence, synthesize_brush};
use tracery_measure::PathMeasure;

fn arc_path(radius: f64) -> BezPath {
    // Quarter-circle cubic approximation, enough curvature to be honest.
    let k = 0.5522847498 * radius;
    let mut path = BezPath::new();
    path.move_to((radius, 0.0));
    path.curve_to((radius, k), (k, radius), (0.0, radius));
    path
}

fn bench_synthesize_brush(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoration/synthesize_brush");

    // Texture synthesis is O(path length); keep the sizes honest about it.
    for radius in [50.0, 200.0, 800.0] {
        let measure = PathMeasure::from_path(&arc_path(radius), false);
        let colors = ColorSequence::from_colors(
            [
                Color::from_rgb8(255, 0, 0),
                Color::from_rgb8(0, 255, 0),
                Color::from_rgb8(0, 0, 255),
            ],
            ColorMode::Gradient,
        );
        group.bench_function(format!("radius_{radius}"), |b| {
            b.iter(|| black_box(synthesize_brush(&measure, &colors)));
        });
    }

    group.finish();
}

fn bench_color_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoration/color_at");

    let colors = ColorSequence::from_colors(
        [
            Color::from_rgb8(255, 0, 0),
            Color::from_rgb8(0, 255, 0),
            Color::from_rgb8(0, 0, 255),
        ],
        ColorMode::Gradient,
    );
    group.bench_function("sweep_256", |b| {
        b.iter(|| {
            for i in 0..256 {
                black_box(colors.color_at(f64::from(i), 256.0));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_synthesize_brush, bench_color_at);
criterion_main!(benches);
