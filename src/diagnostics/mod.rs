//! Diagnostics data model exposed by the flagger.
//!
//! [`FlagReport`] is the main result returned by
//! [`RfiFlagger::flag`](crate::RfiFlagger::flag): the final mask plus a
//! [`PipelineTrace`]
//! describing every η pass and its timing. For consumers that need the
//! per-pass intermediates themselves (smoothed grid, residual, pass mask)
//! the [`PassObserver`] trait delivers borrowed snapshots during the run;
//! the detection core works identically with no observer attached.

mod observer;
mod pipeline;
mod timing;

pub use observer::{CollectedPass, PassCollector, PassObserver, PassSnapshot};
pub use pipeline::{FlagReport, InputDescriptor, PassReport, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
