use floatview_animation::Animatable;
use floatview_core::{Runtime, RuntimeHandle};
use floatview_foundation::{uptime_millis, MotionEvent, PointerAction, PointerEventQueue};
use floatview_ui::{attach, FloatingConfig, FloatingWindow, Point, Size};

const CONTAINER: Size = Size {
    width: 1080.0,
    height: 1920.0,
};
const CONTENT: Size = Size {
    width: 360.0,
    height: 240.0,
};
const DENSITY: f32 = 3.0;
const FRAME_NANOS: u64 = 16_666_667;

type Window = FloatingWindow<Animatable<f32>>;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Floatview headless demo ===");

    let runtime = Runtime::new();
    let handle = runtime.handle();
    let translation = Animatable::new(0.0f32, handle.clone());
    let mut observer = translation.clone();
    observer.set_on_value_change(|value| log::trace!("translation_y {value:.1}"));
    let config = FloatingConfig::default().with_density(DENSITY);

    let Some(mut window) = attach(&CONTAINER, config, CONTENT, translation) else {
        log::error!("demo container rejected the widget");
        return;
    };
    println!("widget anchored at {:?}", window.origin());

    let queue = PointerEventQueue::new();
    let mut frame_time = 0;

    println!("-- slow drag down, release: widget stays where dropped");
    let start = uptime_millis();
    let anchor = window.origin();
    script_drag(&queue, anchor, 120.0, 120.0, start, 12, 40);
    deliver(&queue, &mut window);
    frame_time = run_frames(&handle, frame_time);
    println!("offset after release: {:.1}", observer.value());

    println!("-- quick upward fling: widget flies off");
    let origin = window.bounds_in_container().origin();
    script_drag(&queue, origin, 60.0, -150.0, start + 1_000, 5, 10);
    deliver(&queue, &mut window);
    frame_time = run_frames(&handle, frame_time);
    println!("offset after fling: {:.1}", observer.value());

    println!("-- reset");
    window.reset();
    run_frames(&handle, frame_time);
    println!("offset after reset: {:.1}", observer.value());
}

/// Queues a single-finger vertical drag starting `inset` below `origin`.
fn script_drag(
    queue: &PointerEventQueue,
    origin: Point,
    inset: f32,
    distance: f32,
    start_ms: u64,
    steps: u32,
    step_ms: u64,
) {
    let down = Point::new(origin.x + 20.0, origin.y + inset);
    queue.push_event(MotionEvent::single(PointerAction::Down, 1, down, start_ms));
    let mut position = down;
    for step in 1..=steps {
        position = down.translate(0.0, distance * step as f32 / steps as f32);
        let time = start_ms + step as u64 * step_ms;
        queue.push_event(MotionEvent::single(PointerAction::Move, 1, position, time));
    }
    let end = start_ms + steps as u64 * step_ms;
    queue.push_event(MotionEvent::single(PointerAction::Up, 1, position, end));
}

fn deliver(queue: &PointerEventQueue, window: &mut Window) {
    queue.drain(|event| {
        window.dispatch_container_event(&event, None);
    });
}

/// Pumps frames until no animation is waiting, returning the last frame time.
fn run_frames(handle: &RuntimeHandle, mut frame_time: u64) -> u64 {
    while handle.has_frame_callbacks() {
        handle.drain_frame_callbacks(frame_time);
        frame_time += FRAME_NANOS;
    }
    frame_time
}
