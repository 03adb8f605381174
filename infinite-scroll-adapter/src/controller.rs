use infinite_scroll::{Layout, Recycler, RecyclerOptions};

use crate::{ListEvent, MotionController, MotionOptions};

/// A framework-neutral controller that wraps an `infinite_scroll::Recycler` and owns the
/// shared scroll offset.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `initialize(viewport_height)` once geometry is available
/// - the `on_*` entry points (or `dispatch`) when host events occur
/// - `tick(dt)` each frame, pushing the returned offset into the real scroll widget
///
/// Every write to the scroll offset refreshes the pool before returning, so the slots are
/// never more than one frame behind.
#[derive(Clone, Debug)]
pub struct Controller {
    recycler: Recycler,
    motion: MotionController,
    scroll_offset: f64,
    velocity: f64,
}

impl Controller {
    pub fn new(options: RecyclerOptions, motion: MotionOptions) -> Self {
        Self::from_recycler(Recycler::new(options), motion)
    }

    pub fn from_recycler(recycler: Recycler, motion: MotionOptions) -> Self {
        Self {
            scroll_offset: recycler.clamp_scroll_offset(recycler.scroll_offset()),
            recycler,
            motion: MotionController::new(motion),
            velocity: 0.0,
        }
    }

    pub fn recycler(&self) -> &Recycler {
        &self.recycler
    }

    pub fn into_recycler(self) -> Recycler {
        self.recycler
    }

    pub fn layout(&self) -> &Layout {
        self.recycler.layout()
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn cancel_animation(&mut self) {
        self.motion.cancel();
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> f64 {
        self.recycler.max_scroll_offset()
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Mirrors the host's scroll velocity (e.g. inertial scrolling).
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// Allocates the slot pool for `viewport_height` and binds it at the current offset.
    pub fn initialize(&mut self, viewport_height: f64) {
        self.recycler.initialize(viewport_height);
        self.scroll_offset = self.recycler.clamp_scroll_offset(self.scroll_offset);
        self.recycler.refresh(self.scroll_offset);
    }

    /// Call this when the host reports a scroll offset change.
    ///
    /// The offset is clamped into the valid scroll range and the pool is refreshed. Active
    /// motion keeps running; hosts echo its writes back through this entry point.
    pub fn on_scroll_changed(&mut self, offset: f64) {
        self.scroll_offset = self.recycler.clamp_scroll_offset(offset);
        self.recycler.refresh(self.scroll_offset);
    }

    /// Call this when the user grabs the list. Cancels any active motion.
    pub fn on_drag_begin(&mut self) {
        self.cancel_animation();
    }

    /// Call this when the user releases a drag: zeroes the velocity and snaps to the nearest
    /// item boundary.
    ///
    /// Returns the clamped target offset.
    pub fn on_drag_end(&mut self) -> f64 {
        self.velocity = 0.0;
        let layout = self.recycler.layout();
        let target = layout.offset_of(layout.nearest_index(self.scroll_offset));
        self.move_to(target)
    }

    /// Moves `step` items from the item nearest to the current offset (`-1` up, `+1` down).
    ///
    /// Returns the clamped target offset.
    pub fn on_step(&mut self, step: i64) -> f64 {
        let current = self.recycler.layout().nearest_index(self.scroll_offset);
        let index = i64::try_from(current)
            .unwrap_or(i64::MAX)
            .saturating_add(step);
        self.jump_to_index(index, false)
    }

    /// Parses `text` as an item index and moves to it.
    ///
    /// Input that is not an integer is ignored (`None`, no state change). Out-of-range
    /// indices are clamped. With `center_on_jump` the item lands mid-viewport.
    pub fn on_jump(&mut self, text: &str) -> Option<f64> {
        let Ok(index) = text.trim().parse::<i64>() else {
            vdebug!(text, "on_jump: ignoring non-numeric input");
            return None;
        };
        let center = self.motion.options().center_on_jump;
        Some(self.jump_to_index(index, center))
    }

    /// Routes a host notification to its entry point.
    ///
    /// Returns the target offset when the event started a motion.
    pub fn dispatch(&mut self, event: ListEvent) -> Option<f64> {
        match event {
            ListEvent::ScrollChanged(offset) => {
                self.on_scroll_changed(offset);
                None
            }
            ListEvent::DragBegin => {
                self.on_drag_begin();
                None
            }
            ListEvent::DragEnd => Some(self.on_drag_end()),
            ListEvent::Step(step) => Some(self.on_step(step.delta())),
            ListEvent::Jump(text) => self.on_jump(&text),
        }
    }

    /// Starts a motion to `index` (clamped into the dataset).
    ///
    /// With `center`, the target is pulled back by half a viewport minus half an item so the
    /// item lands mid-viewport. Returns the clamped target offset.
    pub fn jump_to_index(&mut self, index: i64, center: bool) -> f64 {
        let layout = self.recycler.layout();
        let mut target = layout.offset_of(layout.clamp_index(index));
        if center {
            target -= self.recycler.viewport_height() * 0.5 - layout.item_height() * 0.5;
        }
        self.move_to(target)
    }

    /// Starts a motion to `offset`, cancelling any active one.
    ///
    /// Returns the clamped target offset.
    pub fn move_to(&mut self, offset: f64) -> f64 {
        let max = self.recycler.max_scroll_offset();
        self.motion.move_to(self.scroll_offset, offset, max)
    }

    /// Advances the active motion by `dt`.
    ///
    /// - If a motion is active, writes the new scroll offset, refreshes the pool, and returns
    ///   the offset for the host to apply to its scroll widget.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        if !self.motion.advance(dt, &mut self.scroll_offset) {
            return None;
        }
        self.recycler.refresh(self.scroll_offset);
        Some(self.scroll_offset)
    }
}
