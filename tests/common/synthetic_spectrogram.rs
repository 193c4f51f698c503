use rfi_flagger::grid::{GridF32, Mask2D};

/// Deterministic pseudo-noise waterfall around a flat baseline.
///
/// Uses a small LCG so runs are reproducible without a rand dependency;
/// samples land in `baseline ± amplitude`.
pub fn noise_grid(w: usize, h: usize, baseline: f32, amplitude: f32, seed: u64) -> GridF32 {
    assert!(w > 0 && h > 0, "grid dimensions must be positive");
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut grid = GridF32::new(w, h);
    for v in &mut grid.data {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = ((state >> 33) as f32) / ((1u64 << 31) as f32) - 1.0;
        *v = baseline + amplitude * unit;
    }
    grid
}

/// Inject a persistent narrowband transmitter into frequency bin `f`,
/// returning the ground-truth cells it corrupted.
pub fn inject_narrowband(grid: &mut GridF32, f: usize, power: f32) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(grid.h);
    for t in 0..grid.h {
        let v = grid.get(t, f);
        grid.set(t, f, v + power);
        cells.push((t, f));
    }
    cells
}

/// Inject a broadband burst into time bin `t` across all frequencies.
pub fn inject_burst(grid: &mut GridF32, t: usize, power: f32) -> Vec<(usize, usize)> {
    let mut cells = Vec::with_capacity(grid.w);
    for f in 0..grid.w {
        let v = grid.get(t, f);
        grid.set(t, f, v + power);
        cells.push((t, f));
    }
    cells
}

/// Ground-truth mask from a list of corrupted cells.
pub fn truth_mask(w: usize, h: usize, cells: &[(usize, usize)]) -> Mask2D {
    Mask2D::from_coords(w, h, cells)
}
