//! Per-frame camera update cost.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pinhole::camera::{CameraRig, FpsCamera, OrbitCamera, FIXED_TIME_STEP};
use pinhole::input::{keys, Action, InputSampler, MouseButton};

fn dragging_input() -> InputSampler {
    let mut input = InputSampler::new();
    input.on_mouse_button(MouseButton::Left, Action::Press);
    input.update();
    input.on_cursor_pos(3.0, -2.0);
    input.on_key(keys::W, Action::Press);
    input.on_key(keys::D, Action::Press);
    input
}

fn fps_update_benchmark(c: &mut Criterion) {
    let input = dragging_input();
    let mut camera = FpsCamera::new();
    let _ = c.bench_function("fps_update", |b| {
        b.iter(|| {
            camera.update(black_box(&input), FIXED_TIME_STEP);
            black_box(camera.notify_changed())
        });
    });
}

fn orbit_update_benchmark(c: &mut Criterion) {
    let input = dragging_input();
    let mut camera = OrbitCamera::new();
    let _ = c.bench_function("orbit_update", |b| {
        b.iter(|| {
            camera.update(black_box(&input), FIXED_TIME_STEP);
            black_box(camera.notify_changed())
        });
    });
}

fn sampler_commit_benchmark(c: &mut Criterion) {
    let mut input = InputSampler::new();
    let _ = c.bench_function("sampler_frame", |b| {
        b.iter(|| {
            input.on_cursor_pos(black_box(10.0), black_box(4.0));
            let drag = input.mouse_dragged(MouseButton::Left);
            input.update();
            drag
        });
    });
}

criterion_group!(
    benches,
    fps_update_benchmark,
    orbit_update_benchmark,
    sampler_commit_benchmark
);
criterion_main!(benches);
