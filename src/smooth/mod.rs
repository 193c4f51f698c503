//! Masked window smoothing of spectrogram grids.
//!
//! The smoother computes a Gaussian-weighted moving average per cell while
//! treating masked cells as absent: they contribute neither to the weighted
//! sum nor to the normalization. A cell whose whole window is masked gets
//! the [`NO_DATA`] sentinel, which downstream thresholding must treat as
//! non-evaluable.

mod kernel;
mod masked;
mod options;

pub use kernel::SeparableKernel;
pub use masked::smooth;
pub use options::SmoothingOptions;

/// Sentinel written where a window contains no unmasked samples.
pub const NO_DATA: f32 = f32::NAN;

/// True when `v` is the [`NO_DATA`] sentinel (or otherwise non-finite).
#[inline]
pub fn is_no_data(v: f32) -> bool {
    !v.is_finite()
}
