use serde::Deserialize;

/// Kernel extents and widths for the masked smoother.
///
/// `kernel_t`/`sigma_t` act along the time axis (down columns),
/// `kernel_f`/`sigma_f` along the frequency axis (across rows). Setting an
/// extent to 1 disables smoothing along that axis.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SmoothingOptions {
    /// Window extent in time bins.
    pub kernel_t: usize,
    /// Window extent in frequency bins.
    pub kernel_f: usize,
    /// Gaussian sigma along time, in bins.
    pub sigma_t: f32,
    /// Gaussian sigma along frequency, in bins.
    pub sigma_f: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            kernel_t: 40,
            kernel_f: 20,
            sigma_t: 15.0,
            sigma_f: 7.5,
        }
    }
}
