#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod stats;

// “Expert” modules – still public, but considered unstable internals.
pub mod normalize;
pub mod smooth;

// --- High-level re-exports -------------------------------------------------

// Main entry points: flagger + parameters + convenience wrapper.
pub use crate::detector::{get_rfi_mask, DilationOptions, FlaggerParams, ResidualMode, RfiFlagger};
pub use crate::error::FlagError;
pub use crate::grid::{GridF32, Mask2D};
pub use crate::smooth::SmoothingOptions;

// High-level diagnostics returned by the flagger.
pub use crate::diagnostics::{FlagReport, PassCollector, PassObserver, PipelineTrace};

// Validation helper for ROC construction.
pub use crate::stats::{mask_stats, RocCounts};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use rfi_flagger::prelude::*;
///
/// # fn main() {
/// let grid = GridF32::new(128, 64);
/// let flagger = RfiFlagger::new(FlaggerParams::default());
/// let report = flagger.flag(&grid, None).expect("default config is valid");
/// println!("flagged={}", report.mask.flagged_count());
/// # }
/// ```
pub mod prelude {
    pub use crate::grid::{GridF32, Mask2D};
    pub use crate::{FlagReport, FlaggerParams, RfiFlagger};
}
