//! Interpolation behind the animated balance counter.

use crate::balance::format_amount;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f64,
    to: f64,
    started_at_ms: f64,
}

/// Rendered value of a counter easing towards its latest target.
/// Starts at zero, like a freshly mounted counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    displayed: f64,
    target: f64,
    duration_ms: f64,
    transition: Option<Transition>,
}

impl CounterState {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            displayed: 0.0,
            target: 0.0,
            duration_ms: f64::from(duration_ms),
            transition: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Starts a transition from the currently rendered value to `target`.
    /// Returns `false`, leaving any running transition untouched, when
    /// `target` is already the target.
    pub fn set_target(&mut self, target: f64, now_ms: f64) -> bool {
        if target == self.target {
            return false;
        }

        self.tick(now_ms);
        self.target = target;
        if self.duration_ms <= 0.0 {
            self.displayed = target;
            self.transition = None;
        } else {
            self.transition = Some(Transition {
                from: self.displayed,
                to: target,
                started_at_ms: now_ms,
            });
        }
        true
    }

    /// Advances the transition to `now_ms` and returns the rendered value
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if let Some(transition) = self.transition {
            let elapsed = (now_ms - transition.started_at_ms).max(0.0);
            if elapsed >= self.duration_ms {
                self.displayed = transition.to;
                self.transition = None;
            } else {
                self.displayed = ease_out_expo(
                    elapsed,
                    transition.from,
                    transition.to - transition.from,
                    self.duration_ms,
                );
            }
        }
        self.displayed
    }

    pub fn display(&self, symbol: &str, decimals: usize) -> String {
        format_amount(self.displayed, symbol, decimals)
    }
}

// t: elapsed, b: start, c: change, d: duration
fn ease_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (-(2f64.powf(-10.0 * t / d)) + 1.0) * 1024.0 / 1023.0 + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_sequence_ends_on_last_value() {
        let mut counter = CounterState::new(2000);
        let mut now = 0.0;

        for target in [0.0, 100.5, 100.5, 42.0] {
            counter.set_target(target, now);
            now += 500.0;
            counter.tick(now);
        }
        counter.tick(now + 2000.0);

        assert_eq!(counter.display("$", 2), "$42.00");
        assert!(!counter.is_animating());
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut counter = CounterState::new(2000);
        assert!(!counter.set_target(0.0, 0.0));
        assert!(!counter.is_animating());

        assert!(counter.set_target(100.5, 0.0));
        let midway = counter.tick(1000.0);
        assert!(midway > 0.0 && midway < 100.5);

        let before = counter.clone();
        assert!(!counter.set_target(100.5, 1200.0));
        assert_eq!(counter, before);

        // Still finishes on the original schedule
        assert_eq!(counter.tick(2000.0), 100.5);
    }

    #[test]
    fn test_retarget_starts_from_rendered_value() {
        let mut counter = CounterState::new(1000);
        counter.set_target(100.0, 0.0);
        let rendered = counter.tick(300.0);

        assert!(counter.set_target(0.0, 300.0));
        assert_eq!(counter.displayed(), rendered);
        let falling = counter.tick(600.0);
        assert!(falling < rendered && falling > 0.0);
        assert_eq!(counter.tick(1300.0), 0.0);
    }

    #[test]
    fn test_curve_is_monotonic_and_lands_on_target() {
        let mut counter = CounterState::new(2000);
        counter.set_target(350.0, 0.0);
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = counter.tick(f64::from(step) * 100.0);
            assert!(value >= previous, "step {}: {} < {}", step, value, previous);
            previous = value;
        }
        assert_eq!(counter.display("$", 2), "$350.00");
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut counter = CounterState::new(0);
        assert!(counter.set_target(12.346, 0.0));
        assert!(!counter.is_animating());
        assert_eq!(counter.display("$", 2), "$12.35");
    }
}
