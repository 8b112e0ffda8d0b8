use crate::clock::TimeSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub now_ms: u64,
    /// Seconds since the previous frame
    pub delta: f64,
}

impl FrameInfo {
    pub fn new(number: u64, now_ms: u64, delta: f64) -> Self {
        Self {
            number,
            now_ms,
            delta,
        }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in FrameIterator::new(clock).take(n) { ... }`
pub struct FrameIterator<C: TimeSource> {
    clock: C,
    frame_number: u64,
    last_ms: Option<u64>,
}

impl<C: TimeSource> FrameIterator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            frame_number: 0,
            last_ms: None,
        }
    }
}

impl<C: TimeSource> Iterator for FrameIterator<C> {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.last_ms.is_some() {
            self.clock.advance();
        }
        let now = self.clock.now_ms();
        let delta = self
            .last_ms
            .map_or(0.0, |last| now.saturating_sub(last) as f64 / 1000.0);

        let info = FrameInfo::new(self.frame_number, now, delta);

        self.frame_number += 1;
        self.last_ms = Some(now);

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedStepClock;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut frames = FrameIterator::new(FixedStepClock::new(20));
        let first = frames.next().unwrap();
        assert_eq!(first, FrameInfo::new(0, 0, 0.0));
    }

    #[test]
    fn frames_advance_fixed_step() {
        let frames: Vec<_> = FrameIterator::new(FixedStepClock::new(20)).take(3).collect();
        assert_eq!(frames[2].number, 2);
        assert_eq!(frames[2].now_ms, 40);
        assert!((frames[2].delta - 0.02).abs() < 1e-12);
    }
}
