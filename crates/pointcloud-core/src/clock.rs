use crate::constants::{MAX_STEPS_PER_FRAME, TICKS_PER_SECOND};
use std::time::Duration;

/// Converts display-frame time into whole kernel steps.
///
/// Each kernel step is one nominal 60 Hz frame. Leftover time carries over;
/// a long stall runs at most `max_steps` steps and drops the rest.
#[derive(Clone, Debug)]
pub struct FrameClock {
    step_sec: f64,
    max_steps: u32,
    accum: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND, MAX_STEPS_PER_FRAME)
    }
}

impl FrameClock {
    pub fn new(ticks_per_second: f32, max_steps: u32) -> Self {
        Self {
            step_sec: 1.0 / ticks_per_second.max(1.0) as f64,
            max_steps: max_steps.max(1),
            accum: 0.0,
        }
    }

    /// Number of steps to run for `dt` of elapsed time.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt.as_secs_f64();
        let mut steps = 0;
        while self.accum >= self.step_sec && steps < self.max_steps {
            self.accum -= self.step_sec;
            steps += 1;
        }
        if steps == self.max_steps && self.accum >= self.step_sec {
            self.accum = 0.0;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_nominal_frame() {
        let mut clock = FrameClock::new(60.0, 4);
        let total: u32 = (0..60)
            .map(|_| clock.advance(Duration::from_secs_f64(1.0 / 60.0 + 1e-9)))
            .sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = FrameClock::new(60.0, 4);
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn stalls_are_capped() {
        let mut clock = FrameClock::new(60.0, 4);
        assert_eq!(clock.advance(Duration::from_secs(2)), 4);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }
}
