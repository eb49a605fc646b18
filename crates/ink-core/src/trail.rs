//! The ink trail engine: pointer smoothing, distance-metered emission, aging
//! and drawing.
//!
//! The engine is platform-free. A host feeds it [`TrailEvent`]s, calls
//! [`TrailEngine::update`] once per frame with the elapsed milliseconds and then
//! [`TrailEngine::render`] with any [`InkSurface`].

use crate::blob::{Blob, BlobKind};
use crate::constants::*;
use crate::events::TrailEvent;
use crate::params::TrailParams;
use crate::pointer::PointerState;
use crate::pool::BlobPool;
use crate::surface::{CompositeMode, InkSurface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What a single [`TrailEngine::update`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickStats {
    /// Regular blobs placed along the path.
    pub emitted: usize,
    pub head: bool,
    /// Blobs pushed out by the pool cap.
    pub evicted: usize,
    /// Blobs dropped by aging.
    pub expired: usize,
    pub distance: f32,
    pub speed: f32,
    pub spacing: f32,
}

/// Distance between metered blobs for a pointer moving at `speed` px/ms.
/// Faster movement packs blobs tighter.
#[inline]
pub fn spacing_for_speed(speed: f32, params: &TrailParams) -> f32 {
    (params.max_spacing - speed * SPEED_SPACING_GAIN).clamp(params.min_spacing, params.max_spacing)
}

pub struct TrailEngine {
    params: TrailParams,
    pointer: PointerState,
    blobs: BlobPool,
    viewport: Viewport,
    elapsed: f32,
    rng: StdRng,
}

impl TrailEngine {
    /// `params` are expected to have passed [`TrailParams::validated`].
    pub fn new(params: TrailParams, viewport: Viewport, seed: u64) -> Self {
        Self {
            pointer: PointerState::at(viewport.center()),
            blobs: BlobPool::with_capacity(params.max_blobs),
            params,
            viewport,
            elapsed: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn handle(&mut self, event: TrailEvent) {
        match event {
            TrailEvent::PointerMove { x, y } => self.pointer.on_move(Vec2::new(x, y)),
            TrailEvent::PointerOut { has_related_target } => {
                if !has_related_target {
                    self.pointer.on_leave();
                }
            }
            TrailEvent::Blur => self.pointer.on_leave(),
            TrailEvent::Resize(viewport) => self.viewport = viewport,
        }
    }

    pub fn update(&mut self, delta: f32) -> TickStats {
        let delta = delta.max(0.0);
        self.elapsed += delta;

        let distance = self.pointer.ease(self.params.smoothing);
        let speed = distance / delta.max(MIN_DELTA_MS);
        let spacing = spacing_for_speed(speed, &self.params);
        let mut stats = TickStats {
            distance,
            speed,
            spacing,
            ..TickStats::default()
        };

        if self.pointer.spawning() && distance > MIN_MOVE_DISTANCE {
            self.pointer.travel_carry += distance;
            // At most `capacity` metered blobs per tick; the oldest part of a
            // longer backlog is skipped.
            let budget = self.blobs.capacity().min(MAX_BLOBS);
            let backlog = (self.pointer.travel_carry / spacing) as usize;
            if backlog > budget {
                self.pointer.skip_spawn((backlog - budget) as f32 * spacing);
            }
            while self.pointer.travel_carry >= spacing {
                if stats.emitted == budget {
                    self.pointer.catch_up();
                    break;
                }
                let Some(at) = self.pointer.advance_spawn(spacing, MIN_SEGMENT_DISTANCE) else {
                    break;
                };
                stats.evicted += self.spawn(at, speed, BlobKind::Regular);
                stats.emitted += 1;
                self.pointer.travel_carry -= spacing;
            }
            let head_at = self.pointer.smooth;
            stats.evicted += self.spawn(head_at, speed, BlobKind::Head);
            stats.head = true;
        }

        self.pointer.end_tick();
        stats.expired = self.blobs.age(delta, self.elapsed, self.params.taper);
        stats
    }

    fn spawn(&mut self, at: Vec2, speed: f32, kind: BlobKind) -> usize {
        let blob = Blob::spawn(at, speed, kind, &self.params, &mut self.rng);
        self.blobs.push(blob)
    }

    pub fn render<S: InkSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.viewport.width, self.viewport.height);
        surface.set_composite(CompositeMode::Lighter);
        for blob in self.blobs.iter() {
            surface.fill_radial(&blob.fill());
        }
        surface.set_composite(CompositeMode::SourceOver);
    }

    pub fn blobs(&self) -> &BlobPool {
        &self.blobs
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn params(&self) -> &TrailParams {
        &self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total milliseconds fed through [`TrailEngine::update`].
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
