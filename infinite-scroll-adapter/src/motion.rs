use crate::{DEFAULT_DURATION, Easing, Tween};

/// Configuration for [`MotionController`] and the motion-driven entry points of
/// [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionOptions {
    /// Transition length, in the time unit of `tick(dt)`.
    pub duration: f64,
    pub easing: Easing,
    /// Whether index jumps land the item mid-viewport instead of at the top edge.
    pub center_on_jump: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::SmoothStep,
            center_on_jump: true,
        }
    }
}

impl MotionOptions {
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_center_on_jump(mut self, center_on_jump: bool) -> Self {
        self.center_on_jump = center_on_jump;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    Idle,
    Animating,
}

/// Drives at most one animated transition of a scroll offset at a time.
///
/// Starting a new transition cancels the current one before anything else is written, so two
/// transitions never interleave writes to the offset (last writer wins, no queueing).
#[derive(Clone, Debug)]
pub struct MotionController {
    options: MotionOptions,
    tween: Option<Tween>,
}

impl MotionController {
    pub fn new(options: MotionOptions) -> Self {
        Self {
            options,
            tween: None,
        }
    }

    pub fn options(&self) -> &MotionOptions {
        &self.options
    }

    pub fn state(&self) -> MotionState {
        if self.tween.is_some() {
            MotionState::Animating
        } else {
            MotionState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The active transition, if any.
    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Target offset of the active transition.
    pub fn target(&self) -> Option<f64> {
        self.tween.map(|t| t.to)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn cancel(&mut self) {
        if let Some(tween) = self.tween.take() {
            vtrace!(to = tween.to, elapsed = tween.elapsed, "motion cancelled");
        }
    }

    /// Starts a transition from `from` to `target`, replacing any active one.
    ///
    /// `target` is clamped into `[0, max_offset]` (NaN becomes `0`). Returns the clamped
    /// target.
    pub fn move_to(&mut self, from: f64, target: f64, max_offset: f64) -> f64 {
        let max_offset = if max_offset.is_nan() {
            0.0
        } else {
            max_offset.max(0.0)
        };
        let to = if target.is_nan() {
            0.0
        } else {
            target.clamp(0.0, max_offset)
        };
        // A non-finite start has nothing to ease from; jump straight to the target.
        let from = if from.is_finite() { from } else { to };
        self.cancel();
        vdebug!(from, to, duration = self.options.duration, "motion start");
        self.tween = Some(Tween::new(
            from,
            to,
            self.options.duration,
            self.options.easing,
        ));
        to
    }

    /// Advances the active transition by `dt` and writes the new value into `offset`.
    ///
    /// On completion `offset` is set exactly to the target and the controller returns to
    /// idle. Returns `false` (leaving `offset` untouched) when idle.
    pub fn advance(&mut self, dt: f64, offset: &mut f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        *offset = tween.advance(dt);
        if tween.is_done() {
            vdebug!(to = tween.to, "motion finished");
            *offset = tween.to;
            self.tween = None;
        }
        true
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(MotionOptions::default())
    }
}
