//! Scroll-triggered count-up animation.
//!
//! The counter is a three-phase state machine: `Idle` until the element is
//! first seen, `Animating` while ticks move the value towards `end`, and
//! `Settled` once `end` is shown. Visibility signals after the first one are
//! ignored, so a finished counter never restarts.

/// Total time a count-up run takes, whatever the target.
pub const COUNT_UP_DURATION_MS: u32 = 1_800;

/// Upper bound on the number of visible increments in one run.
pub const MAX_STEPS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpPhase {
    Idle,
    Animating,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    end: u64,
    value: u64,
    step: u64,
    steps: u64,
    phase: CountUpPhase,
}

impl CountUp {
    /// Targets below `MAX_STEPS` count by one so that small numbers still show
    /// every increment; larger targets use `ceil(end / MAX_STEPS)` per tick.
    pub fn new(end: u64) -> Self {
        let steps = end.clamp(1, MAX_STEPS);
        Self {
            end,
            value: 0,
            step: end.div_ceil(steps).max(1),
            steps,
            phase: CountUpPhase::Idle,
        }
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn phase(&self) -> CountUpPhase {
        self.phase
    }

    /// Interval between ticks so the run spans [`COUNT_UP_DURATION_MS`].
    pub fn tick_interval_ms(&self) -> u32 {
        // steps is in 1..=MAX_STEPS
        COUNT_UP_DURATION_MS / self.steps as u32
    }

    /// Handles an "element is in view" signal. Returns `true` only when this
    /// call started the animation.
    pub fn on_visible(&mut self) -> bool {
        if self.phase != CountUpPhase::Idle {
            return false;
        }
        if self.end == 0 {
            self.phase = CountUpPhase::Settled;
            return false;
        }
        self.phase = CountUpPhase::Animating;
        true
    }

    /// Advances one step. Returns `true` while more ticks are needed.
    pub fn tick(&mut self) -> bool {
        if self.phase != CountUpPhase::Animating {
            return false;
        }
        self.value = self.value.saturating_add(self.step).min(self.end);
        if self.value == self.end {
            self.phase = CountUpPhase::Settled;
        }
        self.phase == CountUpPhase::Animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut CountUp) -> Vec<u64> {
        let mut seen = vec![counter.value()];
        while counter.tick() {
            seen.push(counter.value());
        }
        seen.push(counter.value());
        seen
    }

    #[test]
    fn stays_idle_until_visible() {
        let mut c = CountUp::new(10);
        assert!(!c.tick());
        assert_eq!(c.value(), 0);
        assert_eq!(c.phase(), CountUpPhase::Idle);
    }

    #[test]
    fn converges_exactly_and_monotonically() {
        for end in [1, 7, 59, 60, 61, 98, 150, 2500, 1_000_003, u64::MAX - 1, u64::MAX] {
            let mut c = CountUp::new(end);
            assert!(c.on_visible());
            let seen = run(&mut c);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "end={}", end);
            assert_eq!(*seen.last().unwrap(), end);
            assert_eq!(c.phase(), CountUpPhase::Settled);
        }
    }

    #[test]
    fn largest_target_settles_without_overflow() {
        let mut c = CountUp::new(u64::MAX);
        assert!(c.on_visible());
        let mut ticks = 0;
        while c.tick() {
            ticks += 1;
        }
        assert!(ticks < MAX_STEPS);
        assert_eq!(c.value(), u64::MAX);
        assert_eq!(c.phase(), CountUpPhase::Settled);
    }

    #[test]
    fn step_count_is_bounded() {
        let mut big = CountUp::new(1_000_000);
        big.on_visible();
        let mut ticks = 0;
        while big.tick() {
            ticks += 1;
        }
        assert!(ticks < MAX_STEPS);

        let mut small = CountUp::new(5);
        small.on_visible();
        let seen = run(&mut small);
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(small.tick_interval_ms(), COUNT_UP_DURATION_MS / 5);
    }

    #[test]
    fn fires_once() {
        let mut c = CountUp::new(12);
        assert!(c.on_visible());
        assert!(!c.on_visible());
        run(&mut c);
        assert!(!c.on_visible());
        assert_eq!(c.value(), 12);
        assert_eq!(c.phase(), CountUpPhase::Settled);
    }

    #[test]
    fn zero_target_settles_immediately() {
        let mut c = CountUp::new(0);
        assert!(!c.on_visible());
        assert_eq!(c.phase(), CountUpPhase::Settled);
        assert_eq!(c.value(), 0);
    }
}
