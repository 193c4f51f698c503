//! Parameter types configuring the flagging pipeline.
//!
//! Defaults follow the reference SumThreshold deployment for single-dish
//! waterfall data; `chi_1` is the main sensitivity knob and scales with the
//! instrument's power units. For tuning, start with `chi_1` and the η list.

use crate::smooth::SmoothingOptions;
use serde::Deserialize;

/// Flagger-wide parameters controlling the multi-pass pipeline.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FlaggerParams {
    /// Base threshold for the single-sample window, in grid power units.
    pub chi_1: f32,
    /// One detection pass per entry; later (larger) values flag more.
    pub eta: Vec<f32>,
    /// Largest SumThreshold window length; rounded down to a power of two.
    pub max_window: usize,
    /// Geometric decay base `p` of the per-window threshold `chi_1 / p^k`.
    pub decay_base: f32,
    /// Whether windowed sums use signed or absolute residuals.
    pub residual_mode: ResidualMode,
    /// Divide out the per-frequency-bin baseline before detection.
    pub normalize_standing_waves: bool,
    /// Skip the morphological mask growth after each pass.
    pub suppress_dilation: bool,
    /// Masked smoothing kernel applied before every pass.
    pub smoothing: SmoothingOptions,
    /// Structuring element used to grow the mask after each pass.
    pub dilation: DilationOptions,
}

impl Default for FlaggerParams {
    fn default() -> Self {
        Self {
            chi_1: 35_000.0,
            eta: vec![0.5, 0.55, 0.62, 0.75, 1.0],
            max_window: 64,
            decay_base: 1.5,
            residual_mode: ResidualMode::Signed,
            normalize_standing_waves: false,
            suppress_dilation: false,
            smoothing: SmoothingOptions::default(),
            dilation: DilationOptions::default(),
        }
    }
}

/// Convention for the windowed residual sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidualMode {
    /// Sum the residual as-is; only positive excursions are flagged.
    Signed,
    /// Sum |residual|; dropouts below the baseline count too.
    Absolute,
}

impl Default for ResidualMode {
    fn default() -> Self {
        ResidualMode::Signed
    }
}

/// Rectangular structuring element for the mask dilator.
///
/// Extents are total window sizes in bins; an extent of 1 disables growth
/// along that axis.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DilationOptions {
    /// Element extent along time.
    pub struct_t: usize,
    /// Element extent along frequency.
    pub struct_f: usize,
}

impl Default for DilationOptions {
    fn default() -> Self {
        Self {
            struct_t: 3,
            struct_f: 7,
        }
    }
}
