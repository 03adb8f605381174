/// Default transition length, in the same time unit as `tick(dt)` (seconds by convention).
pub const DEFAULT_DURATION: f64 = 0.3;

/// A timed transition of the scroll offset from `from` to `to`.
///
/// The tween is a plain state record advanced by elapsed-time deltas; it holds no clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub elapsed: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    /// A negative or non-finite `duration` is treated as `0` (the tween finishes on its
    /// first step).
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        let duration = if duration.is_finite() && duration >= 0.0 {
            duration
        } else {
            vwarn!(duration, "Tween::new: invalid duration, snapping instead");
            0.0
        };
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            easing,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Current value. Exactly `to` once done, and never outside `[from, to]`.
    pub fn sample(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        let eased = self.easing.sample(self.progress());
        let v = self.from + (self.to - self.from) * eased;
        let (lo, hi) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        // `lo <= hi` only fails for NaN endpoints, where `clamp` would panic.
        if lo <= hi { v.clamp(lo, hi) } else { v }
    }

    /// Adds `dt` to the elapsed time and returns the new value.
    ///
    /// Negative or non-finite deltas do not move the tween.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.sample()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// `t²(3 − 2t)`: zero velocity at both ends.
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto eased progress in `[0, 1]`.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
