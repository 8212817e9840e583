//! Benchmarks for the CPU physics step and the software renderer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftfield::{FieldEngine, MotionPreference, Rect, SceneLayout};

fn bench_engine(count: usize) -> FieldEngine {
    let mut scene = SceneLayout::new();
    scene.add_content(Rect::new(160.0, 90.0, 320.0, 220.0));
    scene.add_interactive(Rect::new(60.0, 380.0, 120.0, 40.0));

    let mut engine = FieldEngine::builder(640, 480)
        .with_seed(9)
        .with_particle_count(count)
        .with_motion(MotionPreference::Full)
        .with_scene(scene)
        .build();
    engine.pointer_moved(320.0, 240.0);
    engine
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [30, 60, 120] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let mut engine = bench_engine(count);
            b.iter(|| engine.tick(black_box(1.0 / 60.0)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in [30, 60, 120] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let mut engine = bench_engine(count);
            engine.tick(1.0 / 60.0);
            b.iter(|| {
                black_box(engine.render());
            })
        });
    }

    group.finish();
}

fn bench_scroll_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_burst");

    // Keep the scroll offset moving so every tick sees live velocity.
    group.bench_function("particles/120", |b| {
        let mut engine = bench_engine(120);
        let mut offset = 0.0_f32;
        b.iter(|| {
            offset += 24.0;
            engine.scroll_to(offset);
            engine.tick(black_box(1.0 / 60.0));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_render, bench_scroll_burst);
criterion_main!(benches);
