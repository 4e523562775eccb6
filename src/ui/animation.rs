//! Time-driven scalar values interpolated per frame.
//!
//! Values never hold a clock; callers pass the instant they want to sample,
//! which keeps the transition reducer pure and lets tests step time exactly.

use std::time::{Duration, Instant};

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Exponential ease-out: fast start, long settle.
    EaseOutExpo,
}

impl Easing {
    /// Maps progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    from: f64,
    to: f64,
    start: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl AnimatedValue {
    /// A value resting at `value`.
    pub fn fixed(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: None,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Retargets to `to`, starting from wherever this value is at `start`.
    pub fn animate_to(self, to: f64, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from: self.value_at(start),
            to,
            start: Some(start),
            duration,
            easing,
        }
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let Some(start) = self.start else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(start);
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}
