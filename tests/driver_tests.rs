// Host-side tests for the frame driver: surface sizing, the frame loop and teardown.

use ink_core::*;

type Driver = TrailDriver<RecordingSurface, ManualScheduler>;

fn driver(viewport: Viewport) -> Driver {
    let engine = TrailEngine::new(TrailParams::default(), viewport, 5);
    TrailDriver::new(engine, RecordingSurface::new(), ManualScheduler::default())
}

fn wiggle(d: &mut Driver, now: &mut f64, frames: u32) {
    for i in 0..frames {
        let x = 200.0 + 15.0 * i as f32;
        d.handle(TrailEvent::PointerMove { x, y: 300.0 });
        *now += 16.0;
        d.frame(*now);
    }
}

#[test]
fn frame_before_start_is_inert() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    assert!(d.frame(16.0).is_none());
    assert!(d.surface().commands.is_empty());
    assert_eq!(d.scheduler().requested, 0);
}

#[test]
fn start_sizes_surface_for_dpr_and_requests_a_frame() {
    let mut d = driver(Viewport::new(800.0, 600.0, 2.0));
    d.start(0.0);
    let size = d.surface().size.unwrap();
    assert_eq!((size.physical_width, size.physical_height), (1600, 1200));
    assert_eq!((size.logical_width, size.logical_height), (800.0, 600.0));
    assert_eq!(size.scale, 2.0);
    assert!(d.is_running());
    assert_eq!(d.pending_frame(), Some(FrameId(1)));
}

#[test]
fn start_twice_is_ignored() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.start(0.0);
    d.start(5.0);
    assert_eq!(d.scheduler().requested, 1);
}

#[test]
fn each_frame_updates_renders_and_reschedules() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.start(0.0);
    let mut now = 0.0;
    wiggle(&mut d, &mut now, 5);
    assert_eq!(d.frames(), 5);
    assert_eq!(d.scheduler().requested, 6);
    assert!(!d.engine().blobs().is_empty());
    assert_eq!(d.engine().elapsed(), 80.0);

    let cmds = d.surface_mut().take_commands();
    let clears = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::Clear { .. }))
        .count();
    assert_eq!(clears, 5);
    assert_eq!(
        cmds.last(),
        Some(&DrawCommand::Composite(CompositeMode::SourceOver))
    );
}

#[test]
fn clock_going_backwards_counts_as_zero_delta() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.start(100.0);
    d.frame(50.0).unwrap();
    assert_eq!(d.engine().elapsed(), 0.0);
    d.frame(66.0).unwrap();
    assert_eq!(d.engine().elapsed(), 16.0);
}

#[test]
fn resize_updates_physical_size_and_repaints() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.start(0.0);
    d.surface_mut().take_commands();

    d.handle(TrailEvent::Resize(Viewport::new(1024.5, 700.0, 1.5)));
    let size = d.surface().size.unwrap();
    assert_eq!(size.physical_width, 1537); // 1536.75
    assert_eq!(size.physical_height, 1050);
    assert_eq!(size.logical_width, 1024.5);
    assert_eq!(size.logical_height, 700.0);

    let cmds = &d.surface().commands;
    assert!(matches!(cmds[0], DrawCommand::Resize(_)));
    assert_eq!(
        cmds[1],
        DrawCommand::Clear {
            width: 1024.5,
            height: 700.0
        }
    );
    assert_eq!(d.engine().viewport().dpr, 1.5);
}

#[test]
fn teardown_mid_animation_cancels_and_stops_drawing() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.start(0.0);
    let mut now = 0.0;
    wiggle(&mut d, &mut now, 10);
    let pending = d.pending_frame().unwrap();

    d.teardown();
    assert!(!d.is_running());
    assert_eq!(d.pending_frame(), None);
    assert_eq!(d.scheduler().cancelled, vec![pending]);
    assert_eq!(d.scheduler().pending, None);

    d.surface_mut().take_commands();
    let requested = d.scheduler().requested;
    assert!(d.frame(now + 16.0).is_none());
    d.handle(TrailEvent::PointerMove { x: 1.0, y: 1.0 });
    d.handle(TrailEvent::Resize(Viewport::new(10.0, 10.0, 1.0)));
    assert!(d.surface().commands.is_empty());
    assert_eq!(d.scheduler().requested, requested);
    assert_eq!(d.frames(), 10);
}

#[test]
fn teardown_is_idempotent() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.start(0.0);
    d.teardown();
    d.teardown();
    assert_eq!(d.scheduler().cancelled.len(), 1);
}

#[test]
fn teardown_before_start_never_schedules() {
    let mut d = driver(Viewport::new(800.0, 600.0, 1.0));
    d.teardown();
    d.start(0.0);
    assert_eq!(d.scheduler().requested, 0);
    assert!(d.surface().commands.is_empty());
}
