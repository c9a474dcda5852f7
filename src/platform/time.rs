//! Fixed-rate tick scheduling
//!
//! Hosts report elapsed wall time; [`FixedStep`] turns it into a whole number
//! of ticks at the configured rate.

/// Maximum ticks per frame to prevent spiral of death
pub const MAX_SUBSTEPS: u32 = 8;

/// Longest frame time accepted (seconds); longer gaps are dropped
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator turning frame times into fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            step: 1.0 / tick_rate_hz.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add elapsed time and return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        // Anything still owed after the cap is dropped
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_only() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.advance(0.05), 3);
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = FixedStep::new(120);
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
        // The dropped backlog does not come back
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedStep::new(60);
        assert_eq!(clock.advance(-5.0), 0);
        assert_eq!(clock.advance(1.0 / 30.0), 2);
    }
}
