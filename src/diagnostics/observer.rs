use crate::grid::{GridF32, Mask2D};

/// Borrowed view of one η pass, handed to a [`PassObserver`] right after
/// the pass completes.
pub struct PassSnapshot<'a> {
    /// Zero-based pass index.
    pub index: usize,
    /// Sensitivity of this pass.
    pub eta: f32,
    /// Masked-smoothed grid the pass thresholded against.
    pub smoothed: &'a GridF32,
    /// Residual `grid - smoothed` used by the detector.
    pub residual: &'a GridF32,
    /// Cells flagged by this pass alone (detection plus dilation).
    pub pass_mask: &'a Mask2D,
    /// Cumulative mask after this pass.
    pub mask: &'a Mask2D,
}

/// Callback invoked once per η pass with the pass intermediates.
///
/// Implementations must not assume the borrowed arrays outlive the call;
/// clone whatever needs to be kept. The flagger runs identically whether or
/// not an observer is attached.
pub trait PassObserver {
    fn on_pass(&mut self, snapshot: &PassSnapshot<'_>);
}

/// Observer that clones every pass snapshot, for offline inspection or
/// plotting layers.
#[derive(Clone, Debug, Default)]
pub struct PassCollector {
    pub passes: Vec<CollectedPass>,
}

/// Owned copy of one pass snapshot.
#[derive(Clone, Debug)]
pub struct CollectedPass {
    pub index: usize,
    pub eta: f32,
    pub smoothed: GridF32,
    pub residual: GridF32,
    pub pass_mask: Mask2D,
    pub mask: Mask2D,
}

impl PassObserver for PassCollector {
    fn on_pass(&mut self, snapshot: &PassSnapshot<'_>) {
        self.passes.push(CollectedPass {
            index: snapshot.index,
            eta: snapshot.eta,
            smoothed: snapshot.smoothed.clone(),
            residual: snapshot.residual.clone(),
            pass_mask: snapshot.pass_mask.clone(),
            mask: snapshot.mask.clone(),
        });
    }
}
