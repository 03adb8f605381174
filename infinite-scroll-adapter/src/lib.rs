//! Adapter utilities for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate owns the slot pool and the layout math. This crate adds what a
//! host needs on top of it:
//!
//! - Smooth, cancelable scroll-to-target motion driven by a per-frame `tick(dt)`
//! - A [`Controller`] that owns the scroll offset and exposes named entry points for host
//!   events (scroll changed, drag begin/end, step buttons, index search)
//!
//! This crate is intentionally framework-agnostic (no widget toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod motion;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use event::{ListEvent, Step};
pub use motion::{MotionController, MotionOptions, MotionState};
pub use tween::{DEFAULT_DURATION, Easing, Tween};
