// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::gallery::{
    GalleryLayout, ItemSpec, LayoutHost, LayoutMetrics, MemoryStore, TransitionTiming, ViewMode,
    ViewTransition,
};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn layout_with(count: usize) -> GalleryLayout {
    let mut layout = GalleryLayout::new(LayoutMetrics::default(), ViewMode::Grid);
    layout.set_viewport(1280.0, 800.0);
    layout.set_items(vec![ItemSpec::PHOTO; count]);
    layout
}

fn relayout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("relayout");

    for count in [100_usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut layout = layout_with(count);
            let mut mode = ViewMode::Grid;
            b.iter(|| {
                mode = mode.toggled();
                layout.apply_mode(black_box(mode));
                black_box(layout.content_height());
            });
        });
    }

    group.finish();
}

fn transition_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_transition");

    for count in [100_usize, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("request_and_frames", count),
            &count,
            |b, &count| {
                let mut layout = layout_with(count);
                let mut store = MemoryStore::new();
                let mut transition = ViewTransition::new(TransitionTiming::default());
                b.iter(|| {
                    let target = transition.mode().toggled();
                    transition.request(target, &mut layout, &mut store);

                    let start = Instant::now();
                    transition.on_frame(start);
                    for frame in 1..=30_u64 {
                        transition.on_frame(start + Duration::from_millis(frame * 16));
                        for index in (0..count).step_by(50) {
                            black_box(transition.visual(index));
                        }
                    }
                    transition.finish();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, relayout_benchmark, transition_benchmark);
criterion_main!(benches);
