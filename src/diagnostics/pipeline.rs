use serde::Serialize;

use crate::diagnostics::TimingBreakdown;
use crate::grid::Mask2D;

/// Result produced by [`RfiFlagger::flag`](crate::RfiFlagger::flag).
#[derive(Clone, Debug)]
pub struct FlagReport {
    /// Final exclusion mask, prior flags included.
    pub mask: Mask2D,
    /// Per-pass execution trace.
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the flagger.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub normalized: bool,
    pub passes: Vec<PassReport>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub time_bins: usize,
    pub freq_bins: usize,
    pub prior_flagged: usize,
}

/// Summary of one sensitivity pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassReport {
    pub index: usize,
    pub eta: f32,
    /// Cells flagged by the SumThreshold sweep of this pass.
    pub detected: usize,
    /// Additional cells added by dilation (0 when suppressed).
    pub dilated: usize,
    /// Cumulative flagged count after this pass.
    pub total_flagged: usize,
    pub elapsed_ms: f64,
}
