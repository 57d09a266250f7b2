use std::time::{Duration, Instant};

/// Snapshot produced by [`FrameClock::tick`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Index of this frame since the clock was created (or last reset).
    pub frame_index: u64,

    /// Average frames per second over the last report window. Set on the
    /// tick that closes a window, `None` otherwise.
    pub fps_report: Option<f32>,
}

/// Per-surface frame clock.
///
/// Delta time is clamped to `[dt_min, dt_max]` so a debugger pause or a
/// suspended surface does not produce a huge first delta.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    report_every: Duration,
    window_start: Instant,
    window_frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
            report_every: Duration::from_secs(1),
            window_start: now,
            window_frames: 0,
        }
    }

    /// Restarts timing and counting, e.g. after the surface is recreated.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.last = now;
        self.frame_index = 0;
        self.window_start = now;
        self.window_frames = 0;
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        self.window_frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        let fps_report = if elapsed >= self.report_every {
            let fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_start = now;
            self.window_frames = 0;
            Some(fps)
        } else {
            None
        };

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
            fps_report,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── dt clamping ───────────────────────────────────────────────────────

    #[test]
    fn dt_is_clamped_to_max_after_a_stall() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn dt_is_clamped_to_min_for_back_to_back_ticks() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start);
        assert_eq!(ft.dt, Duration::from_micros(100).as_secs_f32());
    }

    // ── counting ──────────────────────────────────────────────────────────

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        let t0 = clock.last;
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn reset_restarts_the_count() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.tick();
        clock.reset();
        assert_eq!(clock.frames(), 0);
    }

    // ── fps report ────────────────────────────────────────────────────────

    #[test]
    fn fps_is_reported_once_per_window() {
        let mut clock = FrameClock::new();
        let t0 = clock.last;
        for i in 1..60 {
            let ft = clock.tick_at(t0 + Duration::from_millis(16 * i));
            assert!(ft.fps_report.is_none());
        }
        let ft = clock.tick_at(t0 + Duration::from_secs(1));
        let fps = ft.fps_report.expect("window closed");
        assert!((fps - 60.0).abs() < 0.01);

        let next = clock.tick_at(t0 + Duration::from_millis(1016));
        assert!(next.fps_report.is_none());
    }
}
