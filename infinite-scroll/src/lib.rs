//! A headless recycled-slot engine for virtualized vertical lists.
//!
//! A fixed pool of visual slots stands in for a much larger ordered dataset. Whenever the
//! scroll offset changes, the pool is repositioned and relabeled so that only the slots that
//! can be on screen exist, keeping memory and rendering cost proportional to the viewport
//! rather than to the dataset.
//!
//! The crate is UI-agnostic. A host layer is expected to provide:
//! - the viewport height (once, at start-up)
//! - scroll offset notifications
//! - a way to draw each [`Slot`] (active flag, position, label)
//!
//! For smooth scroll-to-target motion and host event entry points, see the
//! `infinite-scroll-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("infinite-scroll requires either the `std` or the `libm` feature");

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod float;
mod layout;
mod options;
mod recycler;
mod types;


pub use layout::{Layout, max_scroll_offset};
pub use options::{LabelFn, OnRefreshCallback, RecyclerOptions};
pub use recycler::Recycler;
pub use types::{PoolRange, Slot};
