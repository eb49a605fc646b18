use anyhow::{anyhow, bail, Result};
use glam::Vec2;
use ink_core::{
    ManualScheduler, RecordingSurface, TickStats, TrailDriver, TrailEngine, TrailEvent,
    TrailParams, Viewport,
};
use std::f32::consts::TAU;

type ReplayDriver = TrailDriver<RecordingSurface, ManualScheduler>;

const FRAME_MS: f64 = 1000.0 / 60.0;
const LOG_EVERY: u64 = 30;
const FADE_OUT_FRAMES: u32 = 60;
const SEED: u64 = 42;

/// One scripted piece of pointer activity.
#[derive(Clone, Copy, Debug)]
enum Gesture {
    Line { from: Vec2, to: Vec2, frames: u32 },
    Wave { from: Vec2, to: Vec2, amplitude: f32, frames: u32 },
    Hold { frames: u32 },
    LeaveWindow,
    Blur,
}

fn script() -> Vec<Gesture> {
    vec![
        Gesture::Line {
            from: Vec2::new(100.0, 100.0),
            to: Vec2::new(100.0, 200.0),
            frames: 40,
        },
        Gesture::Wave {
            from: Vec2::new(100.0, 200.0),
            to: Vec2::new(1100.0, 400.0),
            amplitude: 120.0,
            frames: 180,
        },
        Gesture::Hold { frames: 45 },
        // Fast flick, a few frames for a long distance.
        Gesture::Line {
            from: Vec2::new(1100.0, 400.0),
            to: Vec2::new(200.0, 700.0),
            frames: 6,
        },
        Gesture::LeaveWindow,
        Gesture::Hold { frames: 20 },
        // Re-entry far away must not streak across the screen.
        Gesture::Line {
            from: Vec2::new(900.0, 120.0),
            to: Vec2::new(980.0, 160.0),
            frames: 30,
        },
        Gesture::Blur,
    ]
}

#[derive(Default)]
struct Totals {
    emitted: usize,
    heads: usize,
    evicted: usize,
    expired: usize,
    peak_live: usize,
}

impl Totals {
    fn add(&mut self, stats: &TickStats, live: usize) {
        self.emitted += stats.emitted;
        self.heads += stats.head as usize;
        self.evicted += stats.evicted;
        self.expired += stats.expired;
        self.peak_live = self.peak_live.max(live);
    }
}

fn step(driver: &mut ReplayDriver, now: f64, totals: &mut Totals) -> Result<()> {
    // Keep only the latest frame's commands around.
    driver.surface_mut().take_commands();
    let stats = driver
        .frame(now)
        .ok_or_else(|| anyhow!("loop stopped unexpectedly at {:.1}ms", now))?;
    let live = driver.engine().blobs().len();
    let cap = driver.engine().params().max_blobs;
    if live > cap {
        bail!("blob cap exceeded: {} > {}", live, cap);
    }
    totals.add(&stats, live);
    if driver.frames() % LOG_EVERY == 0 {
        log::info!(
            "[replay] frame={} live={} fills={} speed={:.3} spacing={:.2} emitted={}",
            driver.frames(),
            live,
            driver.surface().fill_count(),
            stats.speed,
            stats.spacing,
            stats.emitted
        );
    }
    Ok(())
}

fn run_gesture(
    driver: &mut ReplayDriver,
    gesture: Gesture,
    now: &mut f64,
    totals: &mut Totals,
) -> Result<()> {
    log::debug!("[replay] {:?}", gesture);
    match gesture {
        Gesture::Line { from, to, frames } => {
            for i in 0..=frames {
                let p = from.lerp(to, i as f32 / frames as f32);
                driver.handle(TrailEvent::PointerMove { x: p.x, y: p.y });
                *now += FRAME_MS;
                step(driver, *now, totals)?;
            }
        }
        Gesture::Wave {
            from,
            to,
            amplitude,
            frames,
        } => {
            let normal = (to - from).perp().normalize_or_zero();
            for i in 0..=frames {
                let t = i as f32 / frames as f32;
                let p = from.lerp(to, t) + normal * amplitude * (t * TAU).sin();
                driver.handle(TrailEvent::PointerMove { x: p.x, y: p.y });
                *now += FRAME_MS;
                step(driver, *now, totals)?;
            }
        }
        Gesture::Hold { frames } => {
            for _ in 0..frames {
                *now += FRAME_MS;
                step(driver, *now, totals)?;
            }
        }
        Gesture::LeaveWindow => driver.handle(TrailEvent::PointerOut {
            has_related_target: false,
        }),
        Gesture::Blur => driver.handle(TrailEvent::Blur),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let params = TrailParams::default().validated()?;
    let viewport = Viewport::new(1280.0, 800.0, 2.0);
    let engine = TrailEngine::new(params, viewport, SEED);
    let mut driver = TrailDriver::new(engine, RecordingSurface::new(), ManualScheduler::default());

    let mut now = 0.0;
    let mut totals = Totals::default();
    driver.start(now);

    for gesture in script() {
        run_gesture(&mut driver, gesture, &mut now, &mut totals)?;
    }
    for _ in 0..FADE_OUT_FRAMES {
        now += FRAME_MS;
        step(&mut driver, now, &mut totals)?;
    }

    driver.teardown();
    driver.surface_mut().take_commands();
    if driver.frame(now + FRAME_MS).is_some() || driver.surface().fill_count() > 0 {
        bail!("frame ran after teardown");
    }
    if driver.scheduler().pending.is_some() {
        bail!("frame request still pending after teardown");
    }

    log::info!(
        "[replay] done frames={} emitted={} heads={} evicted={} expired={} peak_live={} remaining={}",
        driver.frames(),
        totals.emitted,
        totals.heads,
        totals.evicted,
        totals.expired,
        totals.peak_live,
        driver.engine().blobs().len()
    );
    Ok(())
}
