// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::BezPath;
use tracery_measure::PathMeasure;

/// A wavy multi-contour path with `contours` contours of `segments` cubics each.
fn wavy_path(contours: usize, segments: usize) -> BezPath {
    let mut path = BezPath::new();
    for c in 0..contours {
        let y = c as f64 * 40.0;
        path.move_to((0.0, y));
        for s in 0..segments {
            let x = s as f64 * 30.0;
            path.curve_to(
                (x + 10.0, y - 20.0),
                (x + 20.0, y + 20.0),
                (x + 30.0, y),
            );
        }
    }
    path
}

fn bench_set_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure/set_path");

    for (contours, segments) in [(1usize, 8usize), (4, 8), (16, 16)] {
        let path = wavy_path(contours, segments);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{contours}x{segments}")),
            &path,
            |b, path| {
                b.iter_batched(
                    PathMeasure::new,
                    |mut m| {
                        m.set_path(path, false);
                        black_box(m);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure/point_and_tangent_at");

    let measure = PathMeasure::from_path(&wavy_path(4, 16), false);
    let total = measure.total_length();
    group.bench_function("sweep_64", |b| {
        b.iter(|| {
            for i in 0..64 {
                let d = total * (i as f64) / 63.0;
                black_box(measure.point_and_tangent_at(black_box(d)));
            }
        });
    });

    group.finish();
}

fn bench_find_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure/find_nearest");

    let measure = PathMeasure::from_path(&wavy_path(4, 16), false);
    let bounds = measure.bounds();
    let center = bounds.center();
    group.bench_function("center_probe", |b| {
        b.iter(|| {
            black_box(measure.find_nearest(
                black_box(center.x),
                black_box(center.y),
                50.0,
            ));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_set_path, bench_point_queries, bench_find_nearest);
criterion_main!(benches);
