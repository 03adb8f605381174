//! Float rounding that works with or without `std`.

#[cfg(feature = "std")]
pub(crate) fn floor(v: f64) -> f64 {
    v.floor()
}

#[cfg(not(feature = "std"))]
pub(crate) fn floor(v: f64) -> f64 {
    libm::floor(v)
}

#[cfg(feature = "std")]
pub(crate) fn ceil(v: f64) -> f64 {
    v.ceil()
}

#[cfg(not(feature = "std"))]
pub(crate) fn ceil(v: f64) -> f64 {
    libm::ceil(v)
}

/// Rounds to the nearest integer, ties to even.
#[cfg(feature = "std")]
pub(crate) fn round_ties_even(v: f64) -> f64 {
    v.round_ties_even()
}

/// Rounds to the nearest integer, ties to even.
#[cfg(not(feature = "std"))]
pub(crate) fn round_ties_even(v: f64) -> f64 {
    // `rint` honors the default rounding mode, which is round-half-to-even.
    libm::rint(v)
}

#[cfg(feature = "std")]
pub(crate) fn abs(v: f64) -> f64 {
    v.abs()
}

#[cfg(not(feature = "std"))]
pub(crate) fn abs(v: f64) -> f64 {
    libm::fabs(v)
}
