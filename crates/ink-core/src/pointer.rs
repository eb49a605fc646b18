use glam::Vec2;

/// Smoothed pointer tracking and spawn gating.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
    pub smooth: Vec2,
    pub previous_smooth: Vec2,
    pub last_spawn: Vec2,
    /// Travel distance not yet spent on metered blobs.
    pub travel_carry: f32,
    pub inside: bool,
    pub should_spawn: bool,
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            target: position,
            smooth: position,
            previous_smooth: position,
            last_spawn: position,
            travel_carry: 0.0,
            inside: false,
            should_spawn: false,
        }
    }

    /// Record a raw pointer position. Re-entry snaps all smoothing state to the
    /// new position so no streak is drawn from where the pointer left.
    pub fn on_move(&mut self, position: Vec2) {
        self.target = position;
        if !self.inside {
            self.smooth = position;
            self.previous_smooth = position;
            self.last_spawn = position;
        }
        self.inside = true;
        self.should_spawn = true;
    }

    pub fn on_leave(&mut self) {
        self.inside = false;
        self.should_spawn = false;
        self.travel_carry = 0.0;
    }

    #[inline]
    pub fn spawning(&self) -> bool {
        self.inside && self.should_spawn
    }

    /// Ease `smooth` toward `target` and return the distance travelled since the
    /// previous tick.
    pub fn ease(&mut self, factor: f32) -> f32 {
        self.smooth += (self.target - self.smooth) * factor;
        self.smooth.distance(self.previous_smooth)
    }

    /// Advance `last_spawn` by `step` toward `smooth`. Returns `None` when the
    /// remaining segment is too short to move along.
    pub fn advance_spawn(&mut self, step: f32, min_segment: f32) -> Option<Vec2> {
        let segment = self.smooth - self.last_spawn;
        let length = segment.length();
        if length < min_segment {
            return None;
        }
        self.last_spawn += segment * (step / length);
        Some(self.last_spawn)
    }

    /// Move `last_spawn` up to `distance` toward `smooth` and spend that much
    /// carry without placing blobs.
    pub fn skip_spawn(&mut self, distance: f32) {
        let segment = self.smooth - self.last_spawn;
        let length = segment.length();
        if length > 0.0 {
            self.last_spawn += segment * (distance.min(length) / length);
        }
        self.travel_carry = (self.travel_carry - distance).max(0.0);
    }

    /// Drop any unspent travel and restart metering at the smoothed position.
    pub fn catch_up(&mut self) {
        self.last_spawn = self.smooth;
        self.travel_carry = 0.0;
    }

    #[inline]
    pub fn end_tick(&mut self) {
        self.previous_smooth = self.smooth;
    }
}
