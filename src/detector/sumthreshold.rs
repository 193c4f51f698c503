//! The SumThreshold core: dual-axis windowed thresholding of residuals.
//!
//! For each window length `w` in the ascending schedule, every row is
//! scanned along frequency and every column along time with a running
//! (sum, count) over the unmasked residual cells of the window. A window is
//! flagged whole when its sum exceeds `chi(w) / eta` scaled by the count of
//! cells that actually contributed. Flags merge into the working mask
//! between window lengths, so broader windows see the exclusions made by
//! narrower ones.
//!
//! Boundary policy: only windows fully inside the grid are evaluated, on
//! both axes. Windows containing an unmasked non-finite residual (the
//! smoother's no-data sentinel) are never flagged.

use log::debug;

use super::options::ResidualMode;
use super::schedule::ThresholdSchedule;
use crate::grid::{GridF32, GridView, Mask2D};

/// Residual `grid - smoothed`. Cells where the smoothed grid carries the
/// no-data sentinel stay non-finite and mark their windows non-evaluable.
pub fn residual(grid: &GridF32, smoothed: &GridF32) -> GridF32 {
    debug_assert_eq!(grid.shape(), smoothed.shape());
    let mut out = GridF32::new(grid.w, grid.h);
    for ((r, &g), &s) in out
        .data
        .iter_mut()
        .zip(grid.data.iter())
        .zip(smoothed.data.iter())
    {
        *r = g - s;
    }
    out
}

/// Run one full SumThreshold pass at sensitivity `eta`, updating `mask` in
/// place. Returns the number of newly flagged cells.
pub fn sum_threshold_pass(
    res: &GridF32,
    mask: &mut Mask2D,
    schedule: &ThresholdSchedule,
    eta: f32,
    mode: ResidualMode,
) -> usize {
    debug_assert_eq!(res.shape(), mask.shape());
    let before = mask.flagged_count();

    for entry in schedule.entries() {
        let chi_eff = entry.chi / eta;
        let mut added = 0usize;
        if entry.window <= res.w {
            added += scan_rows(res, mask, entry.window, chi_eff, mode);
        }
        if entry.window <= res.h {
            added += scan_columns(res, mask, entry.window, chi_eff, mode);
        }
        if added > 0 {
            debug!(
                "sum_threshold eta={eta} window={} flagged {added} cells",
                entry.window
            );
        }
    }

    mask.flagged_count() - before
}

#[inline]
fn sample(v: f32, mode: ResidualMode) -> f32 {
    match mode {
        ResidualMode::Signed => v,
        ResidualMode::Absolute => v.abs(),
    }
}

/// Running window over one line of residuals.
///
/// `sum`/`count` cover unmasked finite cells; `bad` counts unmasked
/// non-finite cells, which make the window non-evaluable.
struct LineWindow {
    sum: f32,
    count: usize,
    bad: usize,
}

impl LineWindow {
    fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            bad: 0,
        }
    }

    #[inline]
    fn add(&mut self, v: f32, masked: bool) {
        if masked {
            return;
        }
        if v.is_finite() {
            self.sum += v;
            self.count += 1;
        } else {
            self.bad += 1;
        }
    }

    #[inline]
    fn remove(&mut self, v: f32, masked: bool) {
        if masked {
            return;
        }
        if v.is_finite() {
            self.sum -= v;
            self.count -= 1;
        } else {
            self.bad -= 1;
        }
    }

    #[inline]
    fn exceeds(&self, chi_eff: f32) -> bool {
        self.bad == 0 && self.count > 0 && self.sum > chi_eff * self.count as f32
    }
}

/// Scan every row along the frequency axis with window length `w`.
///
/// Membership reads come from a pre-scan snapshot so flags created by this
/// window length do not perturb the running sums mid-scan.
fn scan_rows(res: &GridF32, mask: &mut Mask2D, w: usize, chi_eff: f32, mode: ResidualMode) -> usize {
    let snapshot = mask.clone();
    let mut added = 0usize;

    for t in 0..res.h {
        let line = res.row(t);
        let flags = snapshot.row(t);
        let mut win = LineWindow::new();
        for f in 0..w {
            win.add(sample(line[f], mode), flags[f]);
        }
        let mut start = 0usize;
        loop {
            if win.exceeds(chi_eff) {
                for f in start..start + w {
                    if !mask.get(t, f) {
                        mask.set(t, f, true);
                        added += 1;
                    }
                }
            }
            if start + w == res.w {
                break;
            }
            win.remove(sample(line[start], mode), flags[start]);
            win.add(sample(line[start + w], mode), flags[start + w]);
            start += 1;
        }
    }

    added
}

/// Scan every column along the time axis with window length `w`.
fn scan_columns(
    res: &GridF32,
    mask: &mut Mask2D,
    w: usize,
    chi_eff: f32,
    mode: ResidualMode,
) -> usize {
    let snapshot = mask.clone();
    let mut added = 0usize;

    for f in 0..res.w {
        let mut win = LineWindow::new();
        for t in 0..w {
            win.add(sample(res.get(t, f), mode), snapshot.get(t, f));
        }
        let mut start = 0usize;
        loop {
            if win.exceeds(chi_eff) {
                for t in start..start + w {
                    if !mask.get(t, f) {
                        mask.set(t, f, true);
                        added += 1;
                    }
                }
            }
            if start + w == res.h {
                break;
            }
            win.remove(sample(res.get(start, f), mode), snapshot.get(start, f));
            win.add(
                sample(res.get(start + w, f), mode),
                snapshot.get(start + w, f),
            );
            start += 1;
        }
    }

    added
}
