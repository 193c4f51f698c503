/// Normalised 1D Gaussian taps evaluated on a centered window.
///
/// For an even extent the window is left-heavy by one sample, matching the
/// offsets produced by [`SeparableKernel::offsets`].
#[derive(Clone, Debug)]
pub struct SeparableKernel {
    taps: Vec<f32>,
    left: isize,
}

impl SeparableKernel {
    /// Build Gaussian taps over `extent` samples with the given sigma.
    ///
    /// `extent` must be at least 1; a non-positive sigma collapses to a
    /// single-sample identity kernel.
    pub fn gaussian(extent: usize, sigma: f32) -> Self {
        let extent = extent.max(1);
        if extent == 1 || sigma <= 0.0 {
            return Self {
                taps: vec![1.0],
                left: 0,
            };
        }
        let left = (extent / 2) as isize;
        let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
        let mut taps = Vec::with_capacity(extent);
        for i in 0..extent {
            let d = i as isize - left;
            taps.push((-(d * d) as f32 * inv_two_sigma_sq).exp());
        }
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps, left }
    }

    /// The 1D taps in left-to-right order.
    #[inline]
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    /// Offset of the first tap relative to the window center (non-positive).
    #[inline]
    pub fn left(&self) -> isize {
        -self.left
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}
