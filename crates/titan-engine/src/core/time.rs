/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Monotonic game clock in milliseconds.
///
/// Advanced by the host once per simulation step; every `Timer` compares
/// against `now_ms()` instead of reading wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameClock {
    now_ms: f64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at an arbitrary timestamp.
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms }
    }

    /// Advance by `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.now_ms += dt as f64 * 1000.0;
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0);
        assert_eq!(steps, 10);
    }

    #[test]
    fn negative_frame_time_adds_nothing() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(1.0 / 60.0 + 1e-4), 1);
    }

    #[test]
    fn clock_advances_in_milliseconds() {
        let mut clock = GameClock::new();
        clock.advance(0.25);
        clock.advance(0.5);
        assert!((clock.now_ms() - 750.0).abs() < 1e-3);
    }

    #[test]
    fn clock_ignores_negative_dt() {
        let mut clock = GameClock::starting_at(100.0);
        clock.advance(-0.5);
        assert_eq!(clock.now_ms(), 100.0);
    }
}
