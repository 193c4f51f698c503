//! Owned single-channel f32 spectrogram grid in row-major layout.
//!
//! Rows are time bins, columns are frequency bins. Suited for the numeric
//! stages of the flagging pipeline.
#[derive(Clone, Debug)]
pub struct GridF32 {
    /// Number of frequency bins (columns)
    pub w: usize,
    /// Number of time bins (rows)
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl GridF32 {
    /// Construct a zero-initialized grid of `w` frequency bins × `h` time bins.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Construct a grid filled with `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap a row-major buffer. `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length must match w * h");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Shape as (time bins, frequency bins).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.h, self.w)
    }

    #[inline]
    /// Convert (t, f) to a linear index into `data`.
    pub fn idx(&self, t: usize, f: usize) -> usize {
        t * self.stride + f
    }

    #[inline]
    /// Get the sample at time bin `t`, frequency bin `f`.
    pub fn get(&self, t: usize, f: usize) -> f32 {
        self.data[self.idx(t, f)]
    }

    #[inline]
    /// Set the sample at time bin `t`, frequency bin `f`.
    pub fn set(&mut self, t: usize, f: usize, v: f32) {
        let i = self.idx(t, f);
        self.data[i] = v;
    }
}

impl crate::grid::traits::GridView for GridF32 {
    type Sample = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, t: usize) -> &[f32] {
        let start = t * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::grid::traits::GridViewMut for GridF32 {
    #[inline]
    fn row_mut(&mut self, t: usize) -> &mut [f32] {
        let start = t * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
