use alloc::string::String;

/// One pooled visual element.
///
/// Slots are created once by [`crate::Recycler::initialize`] and only rebound afterwards.
/// Hosts mirror each slot onto a real widget: show/hide it from `active`, move it to
/// `position`, and display `label`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub active: bool,
    /// Start offset of the bound item along the scroll axis.
    ///
    /// Only updated while active; an inactive slot keeps its last position.
    pub position: f64,
    /// Dataset index currently rendered, `None` when inactive.
    pub bound_index: Option<usize>,
    /// Rendered content for `bound_index`. Empty when inactive.
    pub label: String,
}

impl Slot {
    pub fn is_bound_to(&self, index: usize) -> bool {
        self.bound_index == Some(index)
    }
}

/// The dataset indices bound to active slots after a refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl PoolRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }
}
