use crate::float;

/// Fallback used when a non-positive or non-finite item height is configured.
const FALLBACK_ITEM_HEIGHT: f64 = 1.0;

/// Uniform-stride geometry for a dataset of `total_size` items.
///
/// All offsets are measured in pixels along the scroll axis, with item `0` starting at `0`.
/// Every item occupies `item_height` pixels and consecutive items are separated by
/// `space_height` pixels, so item origins are exactly one [`stride`](Self::stride) apart.
///
/// `Layout` is a plain value: every query is a pure function of the three descriptor fields.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    total_size: usize,
    item_height: f64,
    space_height: f64,
}

impl Layout {
    /// Creates a layout descriptor.
    ///
    /// `item_height` must be finite and positive; other values fall back to `1.0`.
    /// A negative or non-finite `space_height` is treated as `0.0`.
    pub fn new(total_size: usize, item_height: f64, space_height: f64) -> Self {
        let item_height = if item_height.is_finite() && item_height > 0.0 {
            item_height
        } else {
            vwarn!(item_height, "Layout::new: item_height must be positive");
            debug_assert!(
                item_height.is_finite() && item_height > 0.0,
                "Layout: item_height must be finite and positive (got {item_height})"
            );
            FALLBACK_ITEM_HEIGHT
        };
        let space_height = if space_height.is_finite() && space_height > 0.0 {
            space_height
        } else {
            0.0
        };
        Self {
            total_size,
            item_height,
            space_height,
        }
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn space_height(&self) -> f64 {
        self.space_height
    }

    pub fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    /// Distance between the origins of two consecutive items. Always `> 0`.
    pub fn stride(&self) -> f64 {
        self.item_height + self.space_height
    }

    /// Start offset of `index`. Not bounds-checked; callers clamp separately.
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.stride()
    }

    /// Index of the topmost (partially or fully) visible item for a raw scroll offset.
    ///
    /// Uses the magnitude of `offset`, so hosts that store scroll positions negated map to the
    /// same index. The result is not clamped to the dataset. Non-finite offsets map to `0`.
    pub fn index_at_offset(&self, offset: f64) -> usize {
        if !offset.is_finite() {
            return 0;
        }
        let offset = float::abs(offset);
        let stride = self.stride();
        let mut q = float::floor(offset / stride);
        // The quotient can land one off when `q * stride` is not exact; snap it so that
        // item origins always map back to their own index.
        if (q + 1.0) * stride <= offset {
            q += 1.0;
        } else if q > 0.0 && q * stride > offset {
            q -= 1.0;
        }
        // Saturating float -> int cast.
        q as usize
    }

    /// Index whose origin is nearest to `offset` (ties round to even).
    ///
    /// Like [`Self::index_at_offset`], this uses the magnitude of `offset` and does not clamp.
    pub fn nearest_index(&self, offset: f64) -> usize {
        if !offset.is_finite() {
            return 0;
        }
        float::round_ties_even(float::abs(offset) / self.stride()) as usize
    }

    /// Clamps a (possibly negative or out-of-range) index into `0..total_size`.
    ///
    /// An empty dataset clamps everything to `0`.
    pub fn clamp_index(&self, index: i64) -> usize {
        let last = self.total_size.saturating_sub(1);
        if index <= 0 {
            return 0;
        }
        usize::try_from(index).map_or(last, |i| i.min(last))
    }

    /// Clamps a pool start index so a pool of `visible_count` slots never runs past the end
    /// of the dataset while more data exists above it.
    pub fn clamp_start_index(&self, index: usize, visible_count: usize) -> usize {
        index.min(self.total_size.saturating_sub(visible_count))
    }

    /// Total logical length of the content: items plus the spaces between them.
    pub fn content_extent(&self) -> f64 {
        if self.total_size == 0 {
            return 0.0;
        }
        let n = self.total_size as f64;
        n * self.item_height + (n - 1.0) * self.space_height
    }

    /// Largest valid scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll_offset(&self, viewport_height: f64) -> f64 {
        max_scroll_offset(self.content_extent(), viewport_height)
    }

    /// Number of pool slots needed to cover `viewport_height` plus `overscan` extra slots.
    ///
    /// A missing (non-finite or non-positive) viewport height counts as zero; the result is
    /// never below `1`.
    pub fn pool_size_for(&self, viewport_height: f64, overscan: usize) -> usize {
        let viewport_height = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            0.0
        };
        let visible = float::ceil(viewport_height / self.stride()) as usize;
        visible.saturating_add(overscan).max(1)
    }
}

/// `max(0, content_extent - viewport_height)`, with a missing viewport height counting as zero.
pub fn max_scroll_offset(content_extent: f64, viewport_height: f64) -> f64 {
    let viewport_height = if viewport_height.is_finite() {
        viewport_height
    } else {
        0.0
    };
    let max = content_extent - viewport_height;
    if max.is_nan() || max < 0.0 { 0.0 } else { max }
}
