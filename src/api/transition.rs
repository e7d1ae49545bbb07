use serde::{Deserialize, Serialize};

use crate::core::LinearScale;

/// Values that can be blended between a start and an end state.
pub trait Interpolate: Copy {
    fn interpolate(self, target: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Interpolate for (f64, f64) {
    fn interpolate(self, target: Self, t: f64) -> Self {
        (
            self.0.interpolate(target.0, t),
            self.1.interpolate(target.1, t),
        )
    }
}

impl Interpolate for LinearScale {
    fn interpolate(self, target: Self, t: f64) -> Self {
        LinearScale::new(
            self.domain().interpolate(target.domain(), t),
            self.range().interpolate(target.range(), t),
        )
    }
}

/// Cubic in-out easing.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Timed, eased move of one visual property towards a target value.
///
/// Time is always supplied by the caller in milliseconds, so sampling is
/// deterministic. Retargeting starts the new move from wherever the current
/// one is at that instant; the old move is dropped, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
}

impl<T: Interpolate> Transition<T> {
    /// A transition that is already at rest on `value`.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.duration_ms > 0.0 && now_ms < self.end_ms()
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> T {
        if self.duration_ms <= 0.0 || now_ms >= self.end_ms() {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from.interpolate(self.to, ease_cubic_in_out(t))
    }

    /// Replaces the running move with one heading to `target`.
    pub fn retarget(&mut self, now_ms: f64, target: T, duration_ms: f64) {
        self.from = self.sample(now_ms);
        self.to = target;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms.max(0.0);
    }
}
