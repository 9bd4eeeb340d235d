use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tapline::animation::{
    Bounds, EntranceTracker, Layer, Parallax, RevealTask, Sighting, ENTRANCE_GROUPS,
};
use tapline::form::validate::validate;
use tapline::form::{FieldKind, FieldSpec};
use tapline::options::ParallaxOptions;

fn parallax_frame_benchmark(c: &mut Criterion) {
    let parallax = Parallax::new(ParallaxOptions::default());
    let layers: Vec<Layer> = [Layer::Hero, Layer::About]
        .into_iter()
        .chain((0..12).map(Layer::Portfolio))
        .chain((0..8).map(Layer::Floating))
        .collect();
    let bounds = Bounds { top: 120.0, bottom: 520.0 };

    c.bench_function("parallax_frame_22_layers", |b| {
        b.iter(|| {
            for layer in &layers {
                let _ = black_box(parallax.frame(*layer, bounds, black_box(1800.0), 900.0));
            }
        })
    });
}

fn reveal_frame_benchmark(c: &mut Criterion) {
    c.bench_function("reveal_task_to_completion", |b| {
        b.iter(|| {
            let mut task = RevealTask::new();
            let _ = task.sighted(0.2);
            let mut top = 800.0;
            while top > -700.0 {
                let _ = black_box(task.frame(black_box(top), 400.0, 900.0));
                top -= 16.0;
            }
        })
    });
}

fn entrance_batch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("entrance_batch");

    for count in [10, 50, 200].iter() {
        let batch: Vec<Sighting> = (0..*count)
            .map(|element| Sighting { element, intersecting: true, ratio: 0.5 })
            .collect();

        group.bench_function(format!("{}_elements", count), |b| {
            b.iter(|| {
                let mut tracker = EntranceTracker::new(ENTRANCE_GROUPS[0], *count);
                black_box(tracker.observed(black_box(&batch)))
            })
        });
    }
    group.finish();
}

fn validation_benchmark(c: &mut Criterion) {
    let email = FieldSpec::new("email", FieldKind::Email, true);
    let phone = FieldSpec::new("phone", FieldKind::Text, false);

    c.bench_function("validate_email", |b| {
        b.iter(|| black_box(validate(&email, black_box("someone@example.com"), 10)))
    });
    c.bench_function("validate_phone", |b| {
        b.iter(|| black_box(validate(&phone, black_box("(555) 010-2030"), 10)))
    });
}

criterion_group!(
    benches,
    parallax_frame_benchmark,
    reveal_frame_benchmark,
    entrance_batch_benchmark,
    validation_benchmark
);
criterion_main!(benches);
