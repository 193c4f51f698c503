//! Multi-scale SumThreshold detection pipeline.
//!
//! [`RfiFlagger`] wires the stages together: optional standing-wave
//! normalization, then one pass per configured sensitivity η, each pass
//! smoothing the grid around the current mask, thresholding windowed sums
//! of the residual along both axes, and optionally dilating the result.

mod dilate;
mod options;
mod pipeline;
mod schedule;
mod sumthreshold;

pub use dilate::dilate;
pub use options::{DilationOptions, FlaggerParams, ResidualMode};
pub use pipeline::{get_rfi_mask, RfiFlagger};
pub use schedule::{ScheduleEntry, ThresholdSchedule};
pub use sumthreshold::{residual, sum_threshold_pass};
