use rayon::prelude::*;

use super::kernel::SeparableKernel;
use super::options::SmoothingOptions;
use super::NO_DATA;
use crate::grid::{GridF32, GridView, Mask2D};

/// Weight below which a window is considered to contain no usable samples.
const MIN_WEIGHT: f32 = 1e-12;

/// Masked Gaussian smoothing of `grid`.
///
/// Pure function of `(grid, mask, options)`. Masked cells are excluded from
/// both the weighted sum and its normalization; a cell with no unmasked
/// sample anywhere in its 2D window yields [`NO_DATA`]. Windows are
/// truncated at the grid boundary.
///
/// The separable evaluation carries per-cell partial weights through both
/// axes, so the result equals the full 2D masked weighted average.
pub fn smooth(grid: &GridF32, mask: &Mask2D, options: &SmoothingOptions) -> GridF32 {
    debug_assert_eq!(grid.shape(), mask.shape());
    let kernel_f = SeparableKernel::gaussian(options.kernel_f, options.sigma_f);
    let kernel_t = SeparableKernel::gaussian(options.kernel_t, options.sigma_t);

    let (num, den) = frequency_pass(grid, mask, &kernel_f);
    time_pass(&num, &den, &kernel_t)
}

/// First pass: weighted sums and weights along each row (frequency axis).
fn frequency_pass(
    grid: &GridF32,
    mask: &Mask2D,
    kernel: &SeparableKernel,
) -> (GridF32, GridF32) {
    let (w, h) = (grid.w, grid.h);
    let mut num = GridF32::new(w, h);
    let mut den = GridF32::new(w, h);
    let left = kernel.left();
    let taps = kernel.taps();

    num.data
        .par_chunks_mut(w)
        .zip(den.data.par_chunks_mut(w))
        .enumerate()
        .for_each(|(t, (num_row, den_row))| {
            let src = grid.row(t);
            let masked = mask.row(t);
            for f in 0..w {
                let mut acc = 0.0f32;
                let mut weight = 0.0f32;
                for (i, &tap) in taps.iter().enumerate() {
                    let df = f as isize + left + i as isize;
                    if df < 0 || df >= w as isize {
                        continue;
                    }
                    let df = df as usize;
                    if masked[df] {
                        continue;
                    }
                    acc += tap * src[df];
                    weight += tap;
                }
                num_row[f] = acc;
                den_row[f] = weight;
            }
        });

    (num, den)
}

/// Second pass: combine the per-row partials down each column (time axis)
/// and normalize, writing [`NO_DATA`] where no weight accumulated.
fn time_pass(num: &GridF32, den: &GridF32, kernel: &SeparableKernel) -> GridF32 {
    let (w, h) = (num.w, num.h);
    let mut out = GridF32::new(w, h);
    let left = kernel.left();
    let taps = kernel.taps();

    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(t, out_row)| {
            for f in 0..w {
                let mut acc = 0.0f32;
                let mut weight = 0.0f32;
                for (i, &tap) in taps.iter().enumerate() {
                    let dt = t as isize + left + i as isize;
                    if dt < 0 || dt >= h as isize {
                        continue;
                    }
                    let dt = dt as usize;
                    acc += tap * num.get(dt, f);
                    weight += tap * den.get(dt, f);
                }
                out_row[f] = if weight > MIN_WEIGHT {
                    acc / weight
                } else {
                    NO_DATA
                };
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smooth::is_no_data;

    fn uniform_options(kt: usize, kf: usize) -> SmoothingOptions {
        SmoothingOptions {
            kernel_t: kt,
            kernel_f: kf,
            sigma_t: 1.0,
            sigma_f: 1.0,
        }
    }

    #[test]
    fn constant_grid_smooths_to_itself() {
        let grid = GridF32::filled(8, 6, 3.5);
        let mask = Mask2D::new(8, 6);
        let smoothed = smooth(&grid, &mask, &uniform_options(5, 5));
        for &v in &smoothed.data {
            assert!((v - 3.5).abs() < 1e-5);
        }
    }

    #[test]
    fn masked_cells_do_not_bias_the_average() {
        // A masked outlier must not leak into its neighbors.
        let mut grid = GridF32::filled(7, 7, 1.0);
        grid.set(3, 3, 1000.0);
        let mut mask = Mask2D::new(7, 7);
        mask.set(3, 3, true);
        let smoothed = smooth(&grid, &mask, &uniform_options(3, 3));
        for &v in &smoothed.data {
            assert!((v - 1.0).abs() < 1e-5, "got {v}");
        }
    }

    #[test]
    fn fully_masked_window_yields_sentinel() {
        let grid = GridF32::filled(3, 3, 2.0);
        let mask = Mask2D::filled(3, 3);
        let smoothed = smooth(&grid, &mask, &uniform_options(3, 3));
        assert!(smoothed.data.iter().all(|&v| is_no_data(v)));
    }

    #[test]
    fn smoothing_is_deterministic() {
        let mut grid = GridF32::new(16, 12);
        for (i, v) in grid.data.iter_mut().enumerate() {
            *v = ((i * 37) % 101) as f32;
        }
        let mask = Mask2D::from_coords(16, 12, &[(0, 0), (5, 7), (11, 15)]);
        let opts = SmoothingOptions::default();
        let a = smooth(&grid, &mask, &opts);
        let b = smooth(&grid, &mask, &opts);
        assert_eq!(a.data, b.data);
    }
}
