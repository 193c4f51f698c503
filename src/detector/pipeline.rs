//! Flagger orchestration over the sensitivity list.
//!
//! The [`RfiFlagger`] exposes a simple API: feed a power spectrogram and an
//! optional prior mask, get back the grown mask with per-pass diagnostics.
//! Internally it validates the configuration, optionally removes the
//! standing-wave baseline, then runs one SumThreshold pass per η value,
//! re-smoothing around the cumulative mask before each pass and dilating
//! after it unless suppressed.
//!
//! Typical usage:
//! ```no_run
//! use rfi_flagger::{FlaggerParams, RfiFlagger};
//! use rfi_flagger::grid::GridF32;
//!
//! # fn example(waterfall: GridF32) {
//! let flagger = RfiFlagger::new(FlaggerParams::default());
//! let report = flagger.flag(&waterfall, None).expect("valid config");
//! println!("flagged {} samples", report.mask.flagged_count());
//! # }
//! ```

use log::debug;
use std::time::Instant;

use super::dilate::dilate;
use super::options::FlaggerParams;
use super::schedule::ThresholdSchedule;
use super::sumthreshold::{residual, sum_threshold_pass};
use crate::diagnostics::{
    FlagReport, InputDescriptor, PassObserver, PassReport, PassSnapshot, PipelineTrace,
    TimingBreakdown,
};
use crate::error::FlagError;
use crate::grid::{GridF32, Mask2D};
use crate::normalize::normalize_standing_waves;
use crate::smooth::smooth;

/// RFI flagger orchestrating normalization, masked smoothing, SumThreshold
/// detection and mask dilation across the configured η passes.
pub struct RfiFlagger {
    params: FlaggerParams,
}

impl RfiFlagger {
    /// Create a flagger with the supplied parameters. Validation happens per
    /// call, once the grid shape is known.
    pub fn new(params: FlaggerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FlaggerParams {
        &self.params
    }

    /// Run the full pipeline and return the final mask with diagnostics.
    pub fn flag(&self, grid: &GridF32, prior: Option<&Mask2D>) -> Result<FlagReport, FlagError> {
        self.run(grid, prior, None)
    }

    /// As [`flag`](Self::flag), additionally invoking `observer` with the
    /// intermediates of every pass.
    pub fn flag_with_observer(
        &self,
        grid: &GridF32,
        prior: Option<&Mask2D>,
        observer: &mut dyn PassObserver,
    ) -> Result<FlagReport, FlagError> {
        self.run(grid, prior, Some(observer))
    }

    fn run(
        &self,
        grid: &GridF32,
        prior: Option<&Mask2D>,
        mut observer: Option<&mut dyn PassObserver>,
    ) -> Result<FlagReport, FlagError> {
        self.validate(grid, prior)?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let mut mask = match prior {
            Some(m) => m.clone(),
            None => Mask2D::new(grid.w, grid.h),
        };
        let prior_flagged = mask.flagged_count();

        let normalized_grid;
        let data: &GridF32 = if self.params.normalize_standing_waves {
            let start = Instant::now();
            normalized_grid = normalize_standing_waves(grid, &mask);
            timings.push("normalize", start.elapsed().as_secs_f64() * 1000.0);
            &normalized_grid
        } else {
            grid
        };

        let schedule = ThresholdSchedule::doubling(
            self.params.chi_1,
            self.params.decay_base,
            self.params.max_window,
            grid.w.max(grid.h),
        );

        let mut passes = Vec::with_capacity(self.params.eta.len());
        for (index, &eta) in self.params.eta.iter().enumerate() {
            let pass_start = Instant::now();
            let before_pass = mask.clone();

            let smooth_start = Instant::now();
            let smoothed = smooth(data, &mask, &self.params.smoothing);
            timings.push(
                format!("pass{index} smooth"),
                smooth_start.elapsed().as_secs_f64() * 1000.0,
            );

            let res = residual(data, &smoothed);

            let detect_start = Instant::now();
            let detected = sum_threshold_pass(
                &res,
                &mut mask,
                &schedule,
                eta,
                self.params.residual_mode,
            );
            timings.push(
                format!("pass{index} detect"),
                detect_start.elapsed().as_secs_f64() * 1000.0,
            );

            let mut dilated = 0usize;
            if !self.params.suppress_dilation {
                let dilate_start = Instant::now();
                let grown = dilate(&mask, &self.params.dilation);
                dilated = grown.flagged_count() - mask.flagged_count();
                mask = grown;
                timings.push(
                    format!("pass{index} dilate"),
                    dilate_start.elapsed().as_secs_f64() * 1000.0,
                );
            }

            let total_flagged = mask.flagged_count();
            debug!(
                "pass {index} eta={eta}: detected={detected} dilated={dilated} total={total_flagged}"
            );

            if let Some(obs) = observer.as_deref_mut() {
                let pass_mask = difference(&mask, &before_pass);
                obs.on_pass(&PassSnapshot {
                    index,
                    eta,
                    smoothed: &smoothed,
                    residual: &res,
                    pass_mask: &pass_mask,
                    mask: &mask,
                });
            }

            passes.push(PassReport {
                index,
                eta,
                detected,
                dilated,
                total_flagged,
                elapsed_ms: pass_start.elapsed().as_secs_f64() * 1000.0,
            });
        }

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        Ok(FlagReport {
            mask,
            trace: PipelineTrace {
                input: InputDescriptor {
                    time_bins: grid.h,
                    freq_bins: grid.w,
                    prior_flagged,
                },
                normalized: self.params.normalize_standing_waves,
                passes,
                timings,
            },
        })
    }

    /// Fail fast before any computation starts.
    fn validate(&self, grid: &GridF32, prior: Option<&Mask2D>) -> Result<(), FlagError> {
        if grid.w == 0 || grid.h == 0 {
            return Err(FlagError::EmptyGrid);
        }
        if let Some(mask) = prior {
            if mask.shape() != grid.shape() {
                return Err(FlagError::ShapeMismatch {
                    expected: grid.shape(),
                    got: mask.shape(),
                });
            }
        }
        let p = &self.params;
        if !(p.chi_1 > 0.0) {
            return Err(FlagError::NonPositiveChi { chi_1: p.chi_1 });
        }
        if p.eta.is_empty() {
            return Err(FlagError::EmptyEtaList);
        }
        for (index, &eta) in p.eta.iter().enumerate() {
            if !(eta > 0.0) {
                return Err(FlagError::NonPositiveEta { index, eta });
            }
        }
        if p.smoothing.kernel_t == 0 || p.smoothing.kernel_f == 0 {
            return Err(FlagError::ZeroKernel);
        }
        if p.max_window == 0 {
            // An empty schedule means no window can ever be validated
            // against the grid bounds, so no pass may start.
            return Err(FlagError::WindowExceedsGrid {
                window: p.max_window,
                extent: grid.w.max(grid.h),
            });
        }
        Ok(())
    }
}

/// Cells flagged in `after` but not in `before`.
fn difference(after: &Mask2D, before: &Mask2D) -> Mask2D {
    let mut out = Mask2D::new(after.w, after.h);
    for i in 0..out.data.len() {
        out.data[i] = after.data[i] && !before.data[i];
    }
    out
}

/// Convenience wrapper returning only the mask.
pub fn get_rfi_mask(
    grid: &GridF32,
    prior: Option<&Mask2D>,
    params: FlaggerParams,
) -> Result<Mask2D, FlagError> {
    RfiFlagger::new(params).flag(grid, prior).map(|r| r.mask)
}
