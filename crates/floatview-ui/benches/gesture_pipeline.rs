use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use floatview_foundation::{MotionEvent, PointerAction, PointerSample};
use floatview_testing::RecordingTranslation;
use floatview_ui::{DragGestureController, FloatingConfig, Point, Size, TouchDispatcher};

const CONTENT: Size = Size {
    width: 120.0,
    height: 100.0,
};
const MOVE_SAMPLES: &[usize] = &[16, 64, 256];
const FRAME_MS: u64 = 8;

/// One upward drag of `moves` events, in widget-local coordinates.
fn scripted_gesture(moves: usize) -> Vec<MotionEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(MotionEvent::single(
        PointerAction::Down,
        1,
        Point::new(60.0, 50.0),
        0,
    ));
    for step in 1..=moves {
        let time = step as u64 * FRAME_MS;
        // Widget follows the finger, so the local position barely changes.
        events.push(MotionEvent::new(
            PointerAction::Move,
            0,
            time,
            [PointerSample::new(1, Point::new(60.0, 48.0))],
        ));
    }
    events.push(MotionEvent::single(
        PointerAction::Up,
        1,
        Point::new(60.0, 48.0),
        (moves as u64 + 1) * FRAME_MS,
    ));
    events
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_pipeline");
    for &moves in MOVE_SAMPLES {
        let events = scripted_gesture(moves);
        group.bench_with_input(BenchmarkId::new("moves", moves), &events, |b, events| {
            b.iter(|| {
                let mut controller = DragGestureController::new(
                    FloatingConfig::default(),
                    CONTENT,
                    RecordingTranslation::new(),
                );
                let mut dispatcher = TouchDispatcher::new();
                for event in events {
                    dispatcher.dispatch(&mut controller, None, black_box(event));
                }
                black_box(controller.last_command())
            });
        });
    }
    group.finish();
}

fn bench_release_decision(c: &mut Criterion) {
    let events = scripted_gesture(32);
    let (gesture, release) = events.split_at(events.len() - 1);
    c.bench_function("release_decision", |b| {
        b.iter_batched(
            || {
                let mut controller = DragGestureController::new(
                    FloatingConfig::default(),
                    CONTENT,
                    RecordingTranslation::new(),
                );
                controller.on_intercept_touch_event(&gesture[0]);
                for event in &gesture[1..] {
                    controller.on_touch_event(event);
                }
                controller
            },
            |mut controller| {
                controller.on_touch_event(&release[0]);
                black_box(controller.last_command())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_drag, bench_release_decision);
criterion_main!(benches);
