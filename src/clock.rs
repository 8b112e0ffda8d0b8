/// Millisecond time source for the frame loop
pub trait TimeSource {
    /// Milliseconds since the source started
    fn now_ms(&self) -> u64;

    /// Move to the next frame.
    fn advance(&mut self);
}

/// Deterministic clock - advances a fixed step per frame
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    now_ms: u64,
    step_ms: u64,
}

impl FixedStepClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }

    /// Clock stepping at the given frame rate, rounded to whole milliseconds.
    /// The step never drops below 1 ms, so time always moves forward.
    pub fn from_hz(hz: f64) -> Self {
        Self::new(((1000.0 / hz.max(1.0)).round() as u64).max(1))
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }
}

impl TimeSource for FixedStepClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn advance(&mut self) {
        self.now_ms += self.step_ms;
    }
}
