//! Frame loop bookkeeping around a [`TrailEngine`].
//!
//! The driver owns the engine, the surface and a [`FrameScheduler`]. A host
//! calls [`TrailDriver::frame`] from whatever display-refresh callback it has;
//! the driver computes the frame delta, updates, renders and asks the scheduler
//! for the next frame. [`TrailDriver::teardown`] cancels the pending request and
//! makes every later call inert.

use crate::events::TrailEvent;
use crate::surface::{InkSurface, SurfaceSize};
use crate::trail::{TickStats, TrailEngine};

/// Handle returned by a scheduler for a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameId(pub i32);

pub trait FrameScheduler {
    /// Ask for one more frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Scheduler that only records requests; the caller decides when frames run.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pub pending: Option<FrameId>,
    pub requested: usize,
    pub cancelled: Vec<FrameId>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        self.next_id += 1;
        self.requested += 1;
        let id = FrameId(self.next_id);
        self.pending = Some(id);
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
        self.cancelled.push(id);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct TrailDriver<S, F> {
    engine: TrailEngine,
    surface: S,
    scheduler: F,
    pending: Option<FrameId>,
    last_time_ms: f64,
    state: LoopState,
    frames: u64,
}

impl<S: InkSurface, F: FrameScheduler> TrailDriver<S, F> {
    pub fn new(engine: TrailEngine, surface: S, scheduler: F) -> Self {
        Self {
            engine,
            surface,
            scheduler,
            pending: None,
            last_time_ms: 0.0,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Size the surface and request the first frame. Only the first call has
    /// any effect.
    pub fn start(&mut self, now_ms: f64) {
        if self.state != LoopState::Idle {
            return;
        }
        self.surface
            .resize(SurfaceSize::from_viewport(self.engine.viewport()));
        self.last_time_ms = now_ms;
        self.state = LoopState::Running;
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[driver] host refused the first frame request");
        }
    }

    /// Run one animation frame. Returns `None` when the loop is not running.
    pub fn frame(&mut self, now_ms: f64) -> Option<TickStats> {
        if self.state != LoopState::Running {
            return None;
        }
        self.pending = None;
        let delta = (now_ms - self.last_time_ms).max(0.0) as f32;
        self.last_time_ms = now_ms;

        let stats = self.engine.update(delta);
        self.engine.render(&mut self.surface);
        self.frames += 1;
        log::trace!(
            "[frame] n={} dt={:.2} blobs={} emitted={} expired={}",
            self.frames,
            delta,
            self.engine.blobs().len(),
            stats.emitted,
            stats.expired
        );

        self.pending = self.scheduler.request_frame();
        Some(stats)
    }

    pub fn handle(&mut self, event: TrailEvent) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.engine.handle(event);
        if let TrailEvent::Resize(viewport) = event {
            let size = SurfaceSize::from_viewport(viewport);
            log::debug!(
                "[driver] resize {}x{} @{} -> {}x{}px",
                size.logical_width,
                size.logical_height,
                size.scale,
                size.physical_width,
                size.physical_height
            );
            self.surface.resize(size);
            self.engine.render(&mut self.surface);
        }
    }

    /// Cancel the pending frame and stop. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        self.state = LoopState::Stopped;
        log::info!("[driver] stopped after {} frames", self.frames);
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &TrailEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }
}
