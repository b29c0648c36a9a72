use std::time::{Duration, Instant};

/// Snapshot of the time state supplied to the shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Elapsed wall-clock or fixed time in seconds.
    pub seconds: f32,
    /// Monotonic frame counter for the running session.
    pub frame_index: u64,
}

impl TimeSample {
    /// Creates a new time sample.
    pub fn new(seconds: f32, frame_index: u64) -> Self {
        Self {
            seconds,
            frame_index,
        }
    }
}

/// Abstraction over where time values originate from.
pub trait TimeSource: Send {
    /// Resets the source to its initial state.
    fn reset(&mut self);
    /// Produces a time sample for the next frame.
    fn sample(&mut self) -> TimeSample;
}

/// Time source backed by the system monotonic clock.
///
/// The origin is captured at construction, so the first sample reads close
/// to zero and every later sample is "elapsed seconds since first frame".
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
    frame: u64,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            frame: 0,
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn reset(&mut self) {
        self.origin = Instant::now();
        self.frame = 0;
    }

    fn sample(&mut self) -> TimeSample {
        let elapsed = self.origin.elapsed();
        let sample = TimeSample::new(elapsed.as_secs_f32(), self.frame);
        self.frame = self.frame.saturating_add(1);
        sample
    }
}

/// Time source that always reports a fixed timestamp; used for still frames.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    time: f32,
}

impl FixedTimeSource {
    pub fn new(time: f32) -> Self {
        Self { time }
    }
}

impl TimeSource for FixedTimeSource {
    fn reset(&mut self) {}

    fn sample(&mut self) -> TimeSample {
        TimeSample::new(self.time, 0)
    }
}

/// Convenient alias for owning time sources behind trait objects.
pub type BoxedTimeSource = Box<dyn TimeSource + Send>;

/// Builds a time source for the given optional fixed timestamp.
pub fn time_source_for(fixed_time: Option<f32>) -> BoxedTimeSource {
    match fixed_time {
        Some(time) => Box::new(FixedTimeSource::new(time)),
        None => Box::new(SystemTimeSource::new()),
    }
}

/// Paces redraw requests when an FPS cap is configured.
///
/// With no cap the scheduler is always ready and the event loop redraws at
/// the display's refresh rate.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Option<Duration>,
    next_frame_at: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(target_fps: Option<f32>) -> Self {
        // f64 keeps round intervals exact; 1.0/10.0 in f32 rounds to a
        // nanosecond past 100ms and pushes deadlines off the boundary.
        let interval = target_fps
            .filter(|fps| *fps > 0.0)
            .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps)));
        Self {
            interval,
            next_frame_at: None,
        }
    }

    /// Whether a frame should be rendered at `now`.
    pub fn ready_for_frame(&self, now: Instant) -> bool {
        match (self.interval, self.next_frame_at) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(_), Some(deadline)) => now >= deadline,
        }
    }

    /// Records that a frame was just rendered.
    pub fn mark_rendered(&mut self, now: Instant) {
        if let Some(interval) = self.interval {
            self.next_frame_at = Some(now + interval);
        }
    }

    /// Next instant at which a frame becomes due, if a cap is active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.and(self.next_frame_at)
    }
}
