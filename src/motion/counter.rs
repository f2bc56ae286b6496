//! Count-up state for the impact statistics.
//!
//! `Counter` owns the displayed value and decides which frames are allowed to
//! write it. The browser frame loop only feeds it interpolated values.

use log::debug;

use super::easing::Easing;
use super::tween::Tween;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    /// Waiting for the gating visibility signal. Nothing is displayed.
    Idle,
    Running,
    Finished,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct Counter {
    tween: Tween,
    state: CounterState,
    displayed: Option<i64>,
}

impl Counter {
    pub fn new(from: i64, to: i64, duration_ms: f64) -> Self {
        Self {
            tween: Tween::new(from as f64, to as f64, duration_ms),
            state: CounterState::Idle,
            displayed: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.tween = self.tween.with_easing(easing);
        self
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    /// `None` until the counter has been started.
    pub fn displayed(&self) -> Option<i64> {
        self.displayed
    }

    pub fn tween(&self) -> Tween {
        self.tween
    }

    /// Begins the count. Only an idle counter can start; there is no re-trigger.
    pub fn start(&mut self) -> bool {
        if self.state != CounterState::Idle {
            return false;
        }
        debug!("counter {} -> {} started", self.tween.from, self.tween.to);
        self.state = CounterState::Running;
        self.displayed = Some(self.tween.from.round() as i64);
        true
    }

    /// Writes an interpolated value and returns what is now displayed, if
    /// anything was written. `Tween::value_at` yields `to` exactly once
    /// the duration has passed, which finishes the count.
    pub fn write(&mut self, value: f64) -> Option<i64> {
        if self.state != CounterState::Running {
            return None;
        }

        let value = if value == self.tween.to {
            self.state = CounterState::Finished;
            self.tween.to as i64
        } else {
            let (low, high) = if self.tween.to >= self.tween.from {
                (self.tween.from, self.tween.to)
            } else {
                (self.tween.to, self.tween.from)
            };
            let rounded = value.clamp(low, high).round() as i64;
            // Never step backwards in the direction of travel.
            match self.displayed {
                Some(last) if self.tween.to >= self.tween.from => rounded.max(last),
                Some(last) => rounded.min(last),
                None => rounded,
            }
        };

        self.displayed = Some(value);
        Some(value)
    }

    /// Stops a running count. Later frames write nothing.
    pub fn cancel(&mut self) {
        if self.state == CounterState::Running {
            debug!("counter {} -> {} cancelled", self.tween.from, self.tween.to);
            self.state = CounterState::Cancelled;
        }
    }

    /// Jumps straight to the end value, used when no frame clock is available.
    pub fn finish(&mut self) -> i64 {
        let to = self.tween.to as i64;
        if self.state != CounterState::Cancelled {
            self.state = CounterState::Finished;
            self.displayed = Some(to);
        }
        to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    impl Counter {
        fn frame(&mut self, elapsed_ms: f64) -> Option<i64> {
            self.write(self.tween.value_at(elapsed_ms))
        }
    }

    fn run(counter: &mut Counter, until_ms: f64) -> Vec<i64> {
        let mut writes = Vec::new();
        let mut t = 0.0;
        while t <= until_ms {
            if let Some(value) = counter.frame(t) {
                writes.push(value);
            }
            t += FRAME_MS;
        }
        writes
    }

    #[test]
    fn test_count_is_monotone_and_ends_exactly() {
        let mut counter = Counter::new(0, 30, 2000.0);
        assert!(counter.start());
        let writes = run(&mut counter, 2100.0);

        assert!(writes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(writes.last(), Some(&30));
        assert_eq!(counter.displayed(), Some(30));
        assert_eq!(counter.state(), CounterState::Finished);
    }

    #[test]
    fn test_small_range_still_ends_on_target() {
        let mut counter = Counter::new(0, 2, 2000.0);
        counter.start();
        let writes = run(&mut counter, 2100.0);
        assert!(writes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(counter.displayed(), Some(2));
    }

    #[test]
    fn test_cancel_mid_animation_stops_writes() {
        let mut counter = Counter::new(0, 30, 2000.0);
        counter.start();
        let before = run(&mut counter, 1000.0);
        let shown = counter.displayed();
        assert!(!before.is_empty());

        counter.cancel();
        assert_eq!(counter.state(), CounterState::Cancelled);

        let mut t = 1000.0;
        while t <= 3000.0 {
            assert_eq!(counter.frame(t), None);
            t += FRAME_MS;
        }
        assert_eq!(counter.displayed(), shown);
        assert_ne!(counter.displayed(), Some(30));
    }

    #[test]
    fn test_untriggered_counter_stays_blank() {
        let mut counter = Counter::new(0, 30, 2000.0);
        for step in 0..200 {
            assert_eq!(counter.frame(step as f64 * FRAME_MS), None);
        }
        assert_eq!(counter.displayed(), None);
        assert_eq!(counter.state(), CounterState::Idle);
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut counter = Counter::new(0, 35, 2000.0);
        assert!(counter.start());
        counter.frame(500.0);
        assert!(!counter.start());
        run(&mut counter, 2100.0);
        assert!(!counter.start());
        assert_eq!(counter.displayed(), Some(35));
    }

    #[test]
    fn test_descending_count_never_rises() {
        let mut counter = Counter::new(10, 0, 1000.0);
        counter.start();
        let writes = run(&mut counter, 1100.0);
        assert!(writes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(counter.displayed(), Some(0));
    }

    #[test]
    fn test_finish_after_cancel_keeps_last_value() {
        let mut counter = Counter::new(0, 30, 2000.0);
        counter.start();
        counter.frame(400.0);
        let shown = counter.displayed();
        counter.cancel();
        counter.finish();
        assert_eq!(counter.displayed(), shown);
    }

    #[test]
    fn test_writes_stay_within_range() {
        let mut counter = Counter::new(0, 30, 2000.0);
        counter.start();
        assert_eq!(counter.write(31.7), Some(30));
        assert_eq!(counter.state(), CounterState::Running);
        assert_eq!(counter.write(45.0), Some(30));

        let mut counter = Counter::new(5, 30, 2000.0);
        counter.start();
        assert_eq!(counter.write(-3.0), Some(5));

        let mut counter = Counter::new(10, 0, 1000.0);
        counter.start();
        assert_eq!(counter.write(12.4), Some(10));
        assert_eq!(counter.write(-2.0), Some(0));
    }
}
