//! ROC pixel counts for validating a computed mask against ground truth.
//!
//! Consumes masks, never feeds back into detection. The three counts are
//! what a ROC-curve builder needs: how many pixels are truly RFI, how many
//! the flagger masked, and how large the overlap is.

use crate::error::FlagError;
use crate::grid::Mask2D;

/// Pixel counts relating a computed mask to a ground-truth RFI mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RocCounts {
    /// Ground-truth RFI pixels.
    pub rfi_pixels: usize,
    /// Pixels flagged by the computed mask.
    pub mask_pixels: usize,
    /// Pixels in both sets.
    pub intersection: usize,
}

impl RocCounts {
    /// Fraction of flagged pixels that are real RFI. `None` when the mask
    /// is empty.
    pub fn precision(&self) -> Option<f64> {
        (self.mask_pixels > 0).then(|| self.intersection as f64 / self.mask_pixels as f64)
    }

    /// Fraction of real RFI that got flagged. `None` when there is no RFI.
    pub fn recall(&self) -> Option<f64> {
        (self.rfi_pixels > 0).then(|| self.intersection as f64 / self.rfi_pixels as f64)
    }
}

/// Count RFI, mask and intersection pixels. Shapes must match.
pub fn mask_stats(ground_truth: &Mask2D, mask: &Mask2D) -> Result<RocCounts, FlagError> {
    if ground_truth.shape() != mask.shape() {
        return Err(FlagError::ShapeMismatch {
            expected: ground_truth.shape(),
            got: mask.shape(),
        });
    }
    let mut counts = RocCounts {
        rfi_pixels: 0,
        mask_pixels: 0,
        intersection: 0,
    };
    for (&rfi, &flagged) in ground_truth.data.iter().zip(mask.data.iter()) {
        counts.rfi_pixels += rfi as usize;
        counts.mask_pixels += flagged as usize;
        counts.intersection += (rfi && flagged) as usize;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_masks_count_themselves() {
        let truth = Mask2D::from_coords(4, 4, &[(0, 0), (1, 1)]);
        let counts = mask_stats(&truth, &truth).unwrap();
        assert_eq!(
            counts,
            RocCounts {
                rfi_pixels: 2,
                mask_pixels: 2,
                intersection: 2,
            }
        );
        assert_eq!(counts.precision(), Some(1.0));
        assert_eq!(counts.recall(), Some(1.0));
    }

    #[test]
    fn partial_overlap() {
        let truth = Mask2D::from_coords(4, 4, &[(0, 0), (1, 1), (2, 2)]);
        let mask = Mask2D::from_coords(4, 4, &[(1, 1), (3, 3)]);
        let counts = mask_stats(&truth, &mask).unwrap();
        assert_eq!(counts.rfi_pixels, 3);
        assert_eq!(counts.mask_pixels, 2);
        assert_eq!(counts.intersection, 1);
        assert_eq!(counts.precision(), Some(0.5));
        assert!((counts.recall().unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let truth = Mask2D::new(4, 4);
        let mask = Mask2D::new(4, 5);
        assert!(matches!(
            mask_stats(&truth, &mask),
            Err(FlagError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_denominators_yield_none() {
        let empty = Mask2D::new(3, 3);
        let counts = mask_stats(&empty, &empty).unwrap();
        assert_eq!(counts.precision(), None);
        assert_eq!(counts.recall(), None);
    }
}
