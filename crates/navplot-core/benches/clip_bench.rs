use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use navplot_core::{Color, Graph, LineStyle, Point, RecordingPainter, Viewport};

fn gen_path(n: usize) -> Vec<Point> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // waveform that wanders in and out of a 1024x640 viewport
        let x = (i as f64 * 0.05) as i32 - 200;
        let y = 320 + ((i as f64 * 0.01).sin() * 500.0) as i32;
        v.push(Point::new(x, y));
    }
    v
}

fn bench_clip(c: &mut Criterion) {
    let graph = Graph::new(Viewport::new(0, 0, 1024, 640));
    let mut group = c.benchmark_group("clipped_polyline");
    for &n in &[50_000usize, 100_000usize] {
        let path = gen_path(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &path, |b, p| {
            b.iter_batched(
                RecordingPainter::new,
                |mut rec| {
                    graph.draw_poly_at(&mut rec, black_box(p), Color::BLACK, LineStyle::Solid);
                    rec
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
