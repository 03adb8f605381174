use alloc::string::String;
use alloc::vec::Vec;

use crate::{Layout, PoolRange, RecyclerOptions, Slot};

/// A fixed pool of reusable slots rendering a window of a larger dataset.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter calls [`Self::initialize`] once the viewport height is known, then
///   [`Self::refresh`] on every scroll offset change.
/// - Rendering reads [`Self::slots`] (or uses `on_refresh`) and mirrors them onto widgets.
///
/// The pool size is fixed at initialization; afterwards slots are only rebound.
#[derive(Clone, Debug)]
pub struct Recycler {
    options: RecyclerOptions,
    layout: Layout,
    slots: Vec<Slot>,
    viewport_height: f64,
    content_extent: f64,
    scroll_offset: f64,
    start_index: usize,
    initialized: bool,
}

impl Recycler {
    pub fn new(options: RecyclerOptions) -> Self {
        let layout = Layout::new(options.total_size, options.item_height, options.space_height);
        vdebug!(
            total_size = layout.total_size(),
            stride = layout.stride(),
            overscan = options.overscan,
            "Recycler::new"
        );
        Self {
            options,
            layout,
            slots: Vec::new(),
            viewport_height: 0.0,
            content_extent: layout.content_extent(),
            scroll_offset: 0.0,
            start_index: 0,
            initialized: false,
        }
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Allocates the pool for `viewport_height` and performs the first refresh at offset `0`.
    ///
    /// The pool holds `ceil(viewport_height / stride) + overscan` slots (at least one). A
    /// missing viewport height (non-finite or non-positive) counts as zero.
    ///
    /// Runs once; later calls are ignored so the pool never changes size.
    pub fn initialize(&mut self, viewport_height: f64) {
        if self.initialized {
            vwarn!(
                pool_size = self.slots.len(),
                "Recycler::initialize called twice; ignoring"
            );
            return;
        }
        let pool_size = self
            .layout
            .pool_size_for(viewport_height, self.options.overscan);
        vdebug!(pool_size, viewport_height, "Recycler::initialize");

        self.viewport_height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        self.content_extent = self.layout.content_extent();
        self.slots.clear();
        self.slots.resize_with(pool_size, Slot::default);
        self.initialized = true;

        self.refresh(0.0);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Rebinds every slot for `scroll_offset`.
    ///
    /// Slot `i` is bound to dataset index `start_index + i`, where `start_index` is the
    /// topmost visible index clamped so the pool never runs past the end of the dataset.
    /// Slots past the end of the dataset are deactivated.
    ///
    /// Geometry is recomputed from scratch, so repeated calls with the same offset yield the
    /// same pool state.
    pub fn refresh(&mut self, scroll_offset: f64) {
        let pool_size = self.slots.len();
        let raw = self.layout.index_at_offset(scroll_offset);
        let start_index = self.layout.clamp_start_index(raw, pool_size);
        vtrace!(scroll_offset, start_index, pool_size, "Recycler::refresh");

        self.scroll_offset = scroll_offset;
        self.start_index = start_index;

        let total = self.layout.total_size();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let data_index = start_index.saturating_add(i);
            if data_index < total {
                slot.active = true;
                slot.position = self.layout.offset_of(data_index);
                if !slot.is_bound_to(data_index) {
                    slot.bound_index = Some(data_index);
                    slot.label = (self.options.label)(data_index);
                }
            } else {
                slot.active = false;
                slot.bound_index = None;
                slot.label = String::new();
            }
        }

        if let Some(cb) = &self.options.on_refresh {
            cb(self);
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn pool_size(&self) -> usize {
        self.slots.len()
    }

    /// Dataset index bound to the first slot in the latest refresh.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Scroll offset passed to the latest refresh.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    pub fn max_scroll_offset(&self) -> f64 {
        crate::max_scroll_offset(self.content_extent, self.viewport_height)
    }

    /// Clamps `offset` into `[0, max_scroll_offset]`. NaN maps to `0`.
    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    pub fn active_count(&self) -> usize {
        self.active_range().len()
    }

    /// Dataset indices bound to active slots.
    pub fn active_range(&self) -> PoolRange {
        let end = self
            .start_index
            .saturating_add(self.slots.len())
            .min(self.layout.total_size());
        PoolRange {
            start_index: self.start_index.min(end),
            end_index: end,
        }
    }

    /// Calls `f(slot_index, slot)` for each active slot, in pool order.
    pub fn for_each_active_slot(&self, mut f: impl FnMut(usize, &Slot)) {
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.active {
                f(i, slot);
            }
        }
    }
}
