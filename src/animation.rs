//! Easing and interpolation for the animated metric counters.
//!
//! A [`Tween`] moves a displayed number from its current value towards a new
//! target over a fixed duration, shaped by a CSS-style [`CubicBezier`] curve.
//! Time is passed in explicitly (milliseconds) so the math stays independent
//! of the browser clock.

use crate::config::{ANIMATION_DURATION_MS, EASING_CURVE};

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-3;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 20;

/// Cubic bezier easing with fixed end points (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Default for CubicBezier {
    fn default() -> Self {
        let (x1, y1, x2, y2) = EASING_CURVE;
        Self::new(x1, y1, x2, y2)
    }
}

impl CubicBezier {
    /// `x1` and `x2` are clamped to `0..=1` so the curve stays a function of time.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    // B(t) = 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3
    fn sample(t: f64, p1: f64, p2: f64) -> f64 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        ((a * t + b) * t + c) * t
    }

    fn slope(t: f64, p1: f64, p2: f64) -> f64 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        3.0 * a * t * t + 2.0 * b * t + c
    }

    /// Find the curve parameter whose x coordinate equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = Self::slope(t, self.x1, self.x2);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            let err = Self::sample(t, self.x1, self.x2) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                return t;
            }
            t -= err / slope;
        }

        // Newton stalled on a flat section; bisect instead.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            let current = Self::sample(t, self.x1, self.x2);
            if (current - x).abs() < SUBDIVISION_PRECISION {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x`; exact at both ends.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.solve_t(x), self.y1, self.y2)
    }
}

/// Interpolation of one displayed number towards its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: CubicBezier,
}

impl Tween {
    /// A tween that is already at rest on `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
            easing: CubicBezier::default(),
        }
    }

    pub fn new(from: f64, to: f64, start_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: ANIMATION_DURATION_MS,
            easing: CubicBezier::default(),
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear progress in `0..=1` at `now_ms`.
    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Displayed value at `now_ms`; exactly the target once the tween is finished.
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.ease(p)
    }

    /// Whether a frame that displayed `shown` must be followed by another.
    ///
    /// Decided from the value actually rendered rather than a fresh clock
    /// reading, so a tween that finishes between render and scheduling still
    /// gets the frame that shows its target.
    pub fn needs_frame(&self, shown: f64) -> bool {
        shown != self.to
    }

    /// Restart towards `to`, continuing from wherever the value is at `now_ms`.
    pub fn retarget(&mut self, to: f64, now_ms: f64) {
        let current = self.value_at(now_ms);
        let duration_ms = if self.duration_ms > 0.0 {
            self.duration_ms
        } else {
            ANIMATION_DURATION_MS
        };
        *self = Tween::new(current, to, now_ms).with_duration(duration_ms);
    }
}
