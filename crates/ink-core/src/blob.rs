use crate::constants::*;
use crate::params::TrailParams;
use crate::surface::{GradientStop, RadialFill};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlobKind {
    /// Spawned at a metered point along the path.
    Regular,
    /// Spawned at the smoothed pointer position each moving tick.
    Head,
}

/// A single ink particle. Position is fixed at spawn; only size and opacity
/// change as it ages.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub base_radius: f32,
    pub radius: f32,
    pub alpha: f32,
    pub life: f32,
    pub max_life: f32,
    pub phase: f32,
    pub frequency: f32,
    pub jitter_x: f32,
    pub jitter_y: f32,
}

/// Radius before jitter for a pointer moving at `speed` px/ms.
#[inline]
pub fn radius_for_speed(speed: f32, params: &TrailParams) -> f32 {
    let speed_factor = (speed * SPEED_RADIUS_GAIN).clamp(0.0, 1.0);
    params.min_radius + (params.max_radius - params.min_radius) * speed_factor
}

impl Blob {
    pub fn spawn<R: Rng>(
        at: Vec2,
        speed: f32,
        kind: BlobKind,
        params: &TrailParams,
        rng: &mut R,
    ) -> Self {
        let jitter = 1.0 + rng.gen_range(-RADIUS_JITTER..RADIUS_JITTER);
        let mut base_radius = radius_for_speed(speed, params) * jitter;
        let mut max_life = if params.max_life > params.min_life {
            rng.gen_range(params.min_life..params.max_life)
        } else {
            params.min_life
        };
        if kind == BlobKind::Head {
            base_radius *= params.head_radius_scale;
            max_life *= params.head_life_scale;
        }
        Self {
            x: at.x,
            y: at.y,
            base_radius,
            radius: base_radius,
            alpha: 1.0,
            life: max_life,
            max_life,
            phase: rng.gen_range(0.0..TAU),
            frequency: PULSE_FREQUENCY_MIN + rng.gen::<f32>() * PULSE_FREQUENCY_SPAN,
            jitter_x: rng.gen_range(-DRAW_JITTER..=DRAW_JITTER),
            jitter_y: rng.gen_range(-DRAW_JITTER..=DRAW_JITTER),
        }
    }

    /// Age by `delta` ms and recompute radius/alpha. `elapsed` is the engine
    /// clock driving the pulse. Returns false once the blob should be dropped.
    pub fn age(&mut self, delta: f32, elapsed: f32, taper: f32) -> bool {
        self.life -= delta;
        if self.life <= 0.0 {
            self.life = 0.0;
            return false;
        }
        let remaining = self.life / self.max_life;
        let progress = 1.0 - remaining;
        let pulse = 1.0 + PULSE_AMPLITUDE * (elapsed * self.frequency + self.phase).sin();
        self.alpha = remaining * remaining;
        self.radius = self.base_radius * (-taper * progress).exp() * pulse;
        self.is_visible()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.life > 0.0 && self.radius >= MIN_VISIBLE_RADIUS && self.alpha >= MIN_VISIBLE_ALPHA
    }

    #[inline]
    pub fn draw_center(&self) -> Vec2 {
        Vec2::new(self.x + self.jitter_x, self.y + self.jitter_y)
    }

    pub fn fill(&self) -> RadialFill {
        RadialFill {
            center: self.draw_center(),
            radius: self.radius,
            stops: [
                GradientStop {
                    offset: 0.0,
                    alpha: self.alpha * GRADIENT_CORE_ALPHA,
                },
                GradientStop {
                    offset: GRADIENT_MID_OFFSET,
                    alpha: self.alpha * GRADIENT_MID_ALPHA,
                },
                GradientStop {
                    offset: 1.0,
                    alpha: 0.0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blob(max_life: f32, base_radius: f32) -> Blob {
        Blob {
            x: 0.0,
            y: 0.0,
            base_radius,
            radius: base_radius,
            alpha: 1.0,
            life: max_life,
            max_life,
            phase: 0.0,
            frequency: 0.01,
            jitter_x: 0.0,
            jitter_y: 0.0,
        }
    }

    #[test]
    fn radius_grows_with_speed_and_saturates() {
        let p = TrailParams::default();
        assert_eq!(radius_for_speed(0.0, &p), MIN_RADIUS);
        assert_eq!(radius_for_speed(1.0, &p), MAX_RADIUS);
        let mid = radius_for_speed(1.0 / 24.0, &p);
        assert!((mid - 6.0).abs() < 1e-4);
    }

    #[test]
    fn spawn_respects_ranges() {
        let p = TrailParams::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let b = Blob::spawn(Vec2::new(3.0, 4.0), 0.0, BlobKind::Regular, &p, &mut rng);
            assert!(b.base_radius >= MIN_RADIUS * 0.85 && b.base_radius <= MIN_RADIUS * 1.15);
            assert!(b.max_life >= MIN_LIFE && b.max_life < MAX_LIFE);
            assert_eq!(b.life, b.max_life);
            assert_eq!(b.alpha, 1.0);
            assert!(b.jitter_x.abs() <= DRAW_JITTER && b.jitter_y.abs() <= DRAW_JITTER);
            assert!(b.frequency >= PULSE_FREQUENCY_MIN);
            assert!(b.frequency < PULSE_FREQUENCY_MIN + PULSE_FREQUENCY_SPAN + 1e-6);
        }
    }

    #[test]
    fn head_blobs_are_bigger_and_shorter() {
        let p = TrailParams::default();
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        let regular = Blob::spawn(Vec2::ZERO, 0.02, BlobKind::Regular, &p, &mut a);
        let head = Blob::spawn(Vec2::ZERO, 0.02, BlobKind::Head, &p, &mut b);
        assert!((head.base_radius - regular.base_radius * 1.4).abs() < 1e-4);
        assert!((head.max_life - regular.max_life * 0.72).abs() < 1e-3);
    }

    #[test]
    fn alpha_is_quadratic_in_remaining_life() {
        let mut b = blob(400.0, 8.0);
        assert!(b.age(200.0, 0.0, EXPONENTIAL_TAPER));
        assert!((b.alpha - 0.25).abs() < 1e-6);
    }

    #[test]
    fn expired_life_is_dropped() {
        let mut b = blob(100.0, 8.0);
        assert!(!b.age(100.0, 0.0, EXPONENTIAL_TAPER));
        assert_eq!(b.life, 0.0);
    }

    #[test]
    fn faint_blob_is_dropped_before_life_ends() {
        // alpha = (remaining)^2 < 0.015 once remaining < ~0.1225
        let mut b = blob(1000.0, 100.0);
        assert!(b.age(870.0, 0.0, 0.0001));
        assert!(!b.age(10.0, 0.0, 0.0001));
        assert!(b.life > 0.0);
    }

    #[test]
    fn tiny_blob_is_dropped_on_radius() {
        let mut b = blob(1000.0, 0.36);
        assert!(!b.age(100.0, 0.0, EXPONENTIAL_TAPER));
    }

    #[test]
    fn fill_uses_three_black_stops() {
        let b = blob(100.0, 5.0);
        let f = b.fill();
        assert_eq!(f.radius, 5.0);
        assert_eq!(f.stops[0].alpha, GRADIENT_CORE_ALPHA);
        assert_eq!(f.stops[1].offset, GRADIENT_MID_OFFSET);
        assert_eq!(f.stops[1].alpha, GRADIENT_MID_ALPHA);
        assert_eq!(f.stops[2].alpha, 0.0);
    }
}
