//! Benchmarks for bridge search and path merging.
//!
//! Measures the nearest-neighbor bridge search and the full pipeline on
//! ring-shaped contours at several resolutions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyhole_bridge::{find_bridge, Session, TracedContours};
use keyhole_core::{Contour, Hierarchy, Point};

fn ring(cx: f64, cy: f64, r: f64, n: usize, clockwise: bool) -> Vec<Point> {
    let sign = if clockwise { -1.0 } else { 1.0 };
    (0..n)
        .map(|i| {
            let t = sign * std::f64::consts::TAU * i as f64 / n as f64;
            (cx + r * t.cos(), cy + r * t.sin())
        })
        .collect()
}

fn bench_find_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_bridge");

    for &n in &[100, 1_000, 10_000] {
        let outer = ring(0.0, 0.0, 1000.0, n, false);
        let hole = ring(250.0, 100.0, 200.0, n / 4, true);

        group.bench_with_input(BenchmarkId::new("ring", n), &(outer, hole), |b, (o, h)| {
            b.iter(|| black_box(find_bridge(black_box(o), 0, black_box(h), 1)))
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    group.sample_size(20);

    for &holes in &[1, 8, 32] {
        let mut contours = vec![Contour::new(ring(0.0, 0.0, 2000.0, 4000, false))];
        let mut links = vec![[-1, -1, 1, -1]];
        for i in 0..holes {
            let angle = std::f64::consts::TAU * i as f64 / holes as f64;
            contours.push(Contour::new(ring(
                1200.0 * angle.cos(),
                1200.0 * angle.sin(),
                60.0,
                400,
                true,
            )));
            let next = if i + 1 < holes { i as i32 + 2 } else { -1 };
            let prev = if i == 0 { -1 } else { i as i32 };
            links.push([next, prev, -1, 0]);
        }
        let hierarchy = Hierarchy::from_links(&links).expect("valid links");
        let traced = TracedContours::new(contours, hierarchy);

        group.bench_with_input(BenchmarkId::new("holes", holes), &traced, |b, t| {
            b.iter(|| {
                let mut session = Session::default();
                session.process_traced(black_box(t.clone())).expect("valid trace");
                black_box(session.merged_paths())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_bridge, bench_session);
criterion_main!(benches);
