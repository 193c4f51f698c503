//! Standing-wave baseline removal.
//!
//! Receiver bandpass ripple shows up as a slowly varying multiplicative
//! baseline across frequency. Before detection each frequency bin is
//! divided by its median power over the unmasked time samples, with the
//! per-bin medians smoothed across frequency by a masked moving average so
//! the correction tracks only the slow ripple.
//!
//! A fully masked bin has no defined baseline and is left unchanged, as is
//! any bin whose baseline comes out non-positive or non-finite.

use crate::grid::{GridF32, GridViewMut, Mask2D};

/// Moving-average extent (frequency bins) applied to the raw per-bin medians.
const BASELINE_SMOOTH_EXTENT: usize = 21;

/// Divide each frequency bin by its smoothed unmasked-median baseline.
///
/// Returns a corrected copy; neither `grid` nor `mask` is modified.
pub fn normalize_standing_waves(grid: &GridF32, mask: &Mask2D) -> GridF32 {
    debug_assert_eq!(grid.shape(), mask.shape());
    let baseline = column_medians(grid, mask);
    let baseline = smooth_baseline(&baseline, BASELINE_SMOOTH_EXTENT);

    let mut out = grid.clone();
    for t in 0..out.h {
        let row = out.row_mut(t);
        for (f, v) in row.iter_mut().enumerate() {
            if let Some(b) = baseline[f] {
                *v /= b;
            }
        }
    }
    out
}

/// Median of the unmasked samples of every frequency bin.
///
/// `None` marks a bin with no unmasked samples.
fn column_medians(grid: &GridF32, mask: &Mask2D) -> Vec<Option<f32>> {
    let mut medians = Vec::with_capacity(grid.w);
    let mut scratch = Vec::with_capacity(grid.h);
    for f in 0..grid.w {
        scratch.clear();
        for t in 0..grid.h {
            if !mask.get(t, f) {
                scratch.push(grid.get(t, f));
            }
        }
        medians.push(median(&mut scratch));
    }
    medians
}

/// Moving average over defined bins only; undefined bins stay undefined.
fn smooth_baseline(baseline: &[Option<f32>], extent: usize) -> Vec<Option<f32>> {
    let half = (extent / 2) as isize;
    let n = baseline.len() as isize;
    baseline
        .iter()
        .enumerate()
        .map(|(f, b)| {
            b.as_ref()?;
            let mut sum = 0.0f32;
            let mut count = 0usize;
            for df in -half..=half {
                let i = f as isize + df;
                if i < 0 || i >= n {
                    continue;
                }
                if let Some(v) = baseline[i as usize] {
                    sum += v;
                    count += 1;
                }
            }
            let smoothed = sum / count as f32;
            (smoothed > 0.0 && smoothed.is_finite()).then_some(smoothed)
        })
        .collect()
}

fn median(values: &mut [f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some(0.5 * (values[mid - 1] + values[mid]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ripple_is_divided_out() {
        // Column f carries a constant level (f + 1); after normalization
        // every sample should sit at 1.
        let mut grid = GridF32::new(6, 30);
        for t in 0..grid.h {
            for f in 0..grid.w {
                grid.set(t, f, (f + 1) as f32);
            }
        }
        let mask = Mask2D::new(6, 30);
        let out = normalize_standing_waves(&grid, &mask);
        // The baseline is smoothed across frequency, so allow a wide margin
        // while still requiring the ripple to shrink drastically.
        for t in 0..out.h {
            for f in 0..out.w {
                let v = out.get(t, f);
                assert!(v > 0.2 && v < 5.0, "({t},{f}) = {v}");
            }
        }
    }

    #[test]
    fn fully_masked_bin_is_untouched() {
        let mut grid = GridF32::filled(4, 5, 8.0);
        for t in 0..5 {
            grid.set(t, 2, 42.0);
        }
        let mut mask = Mask2D::new(4, 5);
        for t in 0..5 {
            mask.set(t, 2, true);
        }
        let out = normalize_standing_waves(&grid, &mask);
        for t in 0..5 {
            assert_eq!(out.get(t, 2), 42.0);
        }
    }

    #[test]
    fn median_of_even_and_odd_sets() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 2.0, 3.0]), Some(2.5));
        assert_eq!(median(&mut []), None);
    }
}
