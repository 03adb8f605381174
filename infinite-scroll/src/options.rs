use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::recycler::Recycler;

/// Renders the content label for a dataset index.
pub type LabelFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// A callback fired after every [`Recycler::refresh`].
///
/// Hosts typically use it to push slot state (active, position, label) onto their widgets.
pub type OnRefreshCallback = Arc<dyn Fn(&Recycler) + Send + Sync>;

/// Configuration for [`crate::Recycler`].
///
/// Fixed for the lifetime of one list. Cheap to clone: closures are stored in `Arc`s.
pub struct RecyclerOptions {
    pub total_size: usize,
    pub item_height: f64,
    pub space_height: f64,

    /// Extra slots beyond `ceil(viewport_height / stride)`, hiding pop-in at the edges.
    pub overscan: usize,

    pub label: LabelFn,

    /// Optional callback fired after each refresh.
    pub on_refresh: Option<OnRefreshCallback>,
}

impl Clone for RecyclerOptions {
    fn clone(&self) -> Self {
        Self {
            total_size: self.total_size,
            item_height: self.item_height,
            space_height: self.space_height,
            overscan: self.overscan,
            label: Arc::clone(&self.label),
            on_refresh: self.on_refresh.clone(),
        }
    }
}

impl RecyclerOptions {
    /// Creates options for `total_size` items of `item_height` pixels, without spacing.
    ///
    /// Labels default to `"Item Index: {index}"` and two overscan slots are added.
    pub fn new(total_size: usize, item_height: f64) -> Self {
        Self {
            total_size,
            item_height,
            space_height: 0.0,
            overscan: 2,
            label: Arc::new(|i: usize| format!("Item Index: {i}")),
            on_refresh: None,
        }
    }

    pub fn with_space_height(mut self, space_height: f64) -> Self {
        self.space_height = space_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_label(mut self, label: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.label = Arc::new(label);
        self
    }

    pub fn with_on_refresh(
        mut self,
        on_refresh: Option<impl Fn(&Recycler) + Send + Sync + 'static>,
    ) -> Self {
        self.on_refresh = on_refresh.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for RecyclerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("total_size", &self.total_size)
            .field("item_height", &self.item_height)
            .field("space_height", &self.space_height)
            .field("overscan", &self.overscan)
            .field("on_refresh", &self.on_refresh.is_some())
            .finish_non_exhaustive()
    }
}
