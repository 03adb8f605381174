use alloc::string::String;

/// Direction of a one-item step (e.g. the up/down buttons next to a list).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub fn delta(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Host notifications routed by [`crate::Controller::dispatch`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListEvent {
    /// The host scroll offset changed (user drag, wheel, or a programmatic write).
    ScrollChanged(f64),
    DragBegin,
    /// The user released a drag gesture.
    DragEnd,
    Step(Step),
    /// Text submitted from the index search field.
    Jump(String),
}
