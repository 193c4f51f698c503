//! Morphological growth of the accumulated mask.
//!
//! SumThreshold tends to under-flag the shoulders of strong interference,
//! where the corrupted power falls back toward the noise floor. Growing the
//! mask by a small rectangular structuring element captures those edges.
//! Dilation only ever adds flags and converges once the flagged regions
//! stop touching new cells.

use super::options::DilationOptions;
use crate::grid::Mask2D;

/// Dilate `mask` by a rectangular structuring element.
///
/// A cell becomes flagged when any cell of its centered
/// `struct_t × struct_f` neighborhood is flagged. Separable: the element is
/// applied along frequency, then along time.
pub fn dilate(mask: &Mask2D, options: &DilationOptions) -> Mask2D {
    let horizontal = dilate_rows(mask, options.struct_f);
    dilate_columns(&horizontal, options.struct_t)
}

fn dilate_rows(mask: &Mask2D, extent: usize) -> Mask2D {
    if extent <= 1 {
        return mask.clone();
    }
    let left = (extent / 2) as isize;
    let right = (extent - 1) as isize - left;
    let mut out = mask.clone();
    for t in 0..mask.h {
        let src = mask.row(t);
        for f in 0..mask.w {
            if src[f] {
                continue;
            }
            let lo = (f as isize - left).max(0) as usize;
            let hi = ((f as isize + right) as usize).min(mask.w - 1);
            if src[lo..=hi].iter().any(|&m| m) {
                out.set(t, f, true);
            }
        }
    }
    out
}

fn dilate_columns(mask: &Mask2D, extent: usize) -> Mask2D {
    if extent <= 1 {
        return mask.clone();
    }
    let left = (extent / 2) as isize;
    let right = (extent - 1) as isize - left;
    let mut out = mask.clone();
    for f in 0..mask.w {
        for t in 0..mask.h {
            if mask.get(t, f) {
                continue;
            }
            let lo = (t as isize - left).max(0) as usize;
            let hi = ((t as isize + right) as usize).min(mask.h - 1);
            if (lo..=hi).any(|tt| mask.get(tt, f)) {
                out.set(t, f, true);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(t: usize, f: usize) -> DilationOptions {
        DilationOptions {
            struct_t: t,
            struct_f: f,
        }
    }

    #[test]
    fn grows_a_point_into_a_rectangle() {
        let mask = Mask2D::from_coords(9, 9, &[(4, 4)]);
        let dilated = dilate(&mask, &element(3, 3));
        assert_eq!(dilated.flagged_count(), 9);
        for t in 3..=5 {
            for f in 3..=5 {
                assert!(dilated.get(t, f));
            }
        }
        assert!(!dilated.get(2, 4));
    }

    #[test]
    fn unit_element_is_identity() {
        let mask = Mask2D::from_coords(5, 5, &[(1, 2), (4, 0)]);
        let dilated = dilate(&mask, &element(1, 1));
        assert_eq!(dilated, mask);
    }

    #[test]
    fn never_removes_flags() {
        let mask = Mask2D::from_coords(6, 6, &[(0, 0), (5, 5), (2, 3)]);
        let dilated = dilate(&mask, &element(3, 7));
        assert!(dilated.contains(&mask));
    }

    #[test]
    fn saturated_mask_is_a_fixed_point() {
        let mask = Mask2D::filled(4, 4);
        let dilated = dilate(&mask, &element(3, 3));
        assert_eq!(dilated, mask);
    }

    #[test]
    fn clips_at_the_grid_boundary() {
        let mask = Mask2D::from_coords(4, 4, &[(0, 0)]);
        let dilated = dilate(&mask, &element(3, 3));
        assert!(dilated.get(0, 1));
        assert!(dilated.get(1, 0));
        assert!(dilated.get(1, 1));
        assert!(!dilated.get(2, 2));
    }
}
