//! Boolean exclusion mask paired with a spectrogram grid.
//!
//! `true` marks a sample excluded from every windowed computation, either
//! because the caller pre-masked it or because a detection pass flagged it.
//! The pipeline only ever adds `true`s; nothing un-flags a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask2D {
    /// Number of frequency bins (columns)
    pub w: usize,
    /// Number of time bins (rows)
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<bool>,
}

impl Mask2D {
    /// All-false mask of `w` frequency bins × `h` time bins.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    /// All-true mask, useful for fully pre-masked inputs in tests.
    pub fn filled(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![true; w * h],
        }
    }

    /// Build a mask flagging exactly the listed `(t, f)` coordinates.
    pub fn from_coords(w: usize, h: usize, coords: &[(usize, usize)]) -> Self {
        let mut mask = Self::new(w, h);
        for &(t, f) in coords {
            mask.set(t, f, true);
        }
        mask
    }

    /// Shape as (time bins, frequency bins).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.h, self.w)
    }

    #[inline]
    pub fn idx(&self, t: usize, f: usize) -> usize {
        t * self.w + f
    }

    #[inline]
    pub fn get(&self, t: usize, f: usize) -> bool {
        self.data[self.idx(t, f)]
    }

    #[inline]
    pub fn set(&mut self, t: usize, f: usize, v: bool) {
        let i = self.idx(t, f);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, t: usize) -> &[bool] {
        let start = t * self.w;
        &self.data[start..start + self.w]
    }

    /// Number of flagged cells.
    pub fn flagged_count(&self) -> usize {
        self.data.iter().filter(|&&m| m).count()
    }

    /// `(t, f)` coordinates of every flagged cell, row-major order.
    pub fn flagged_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.w;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(move |(i, _)| (i / w, i % w))
    }

    /// OR-merge `other` into `self`. Shapes must match.
    pub fn or_assign(&mut self, other: &Mask2D) {
        debug_assert_eq!(self.shape(), other.shape());
        for (dst, &src) in self.data.iter_mut().zip(other.data.iter()) {
            *dst |= src;
        }
    }

    /// True when every flagged cell of `other` is also flagged in `self`.
    pub fn contains(&self, other: &Mask2D) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| a || !b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coords_round_trips() {
        let mask = Mask2D::from_coords(4, 3, &[(0, 0), (2, 3)]);
        assert!(mask.get(0, 0));
        assert!(mask.get(2, 3));
        assert_eq!(mask.flagged_count(), 2);
        let coords: Vec<_> = mask.flagged_coords().collect();
        assert_eq!(coords, vec![(0, 0), (2, 3)]);
    }

    #[test]
    fn or_assign_only_adds() {
        let mut a = Mask2D::from_coords(3, 3, &[(1, 1)]);
        let b = Mask2D::from_coords(3, 3, &[(0, 2)]);
        a.or_assign(&b);
        assert!(a.get(1, 1) && a.get(0, 2));
        assert_eq!(a.flagged_count(), 2);
        assert!(a.contains(&b));
    }
}
