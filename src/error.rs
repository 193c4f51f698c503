//! Failure modes of the flagging pipeline.
//!
//! Everything is validated before the first pass starts; a `flag` call
//! either fails immediately or runs to completion.

/// Reasons why a flagging run cannot start.
#[derive(Clone, Debug, PartialEq)]
pub enum FlagError {
    /// Prior mask or ground-truth shape differs from the grid shape.
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Grid has a zero-length axis; no window can be evaluated.
    EmptyGrid,
    /// Base threshold must be strictly positive.
    NonPositiveChi { chi_1: f32 },
    /// At least one sensitivity pass is required.
    EmptyEtaList,
    /// Every sensitivity value must be strictly positive.
    NonPositiveEta { index: usize, eta: f32 },
    /// Smoothing kernel extents must be at least one sample.
    ZeroKernel,
    /// The window cap admits no window at all; even the single-sample
    /// window must be allowed.
    WindowExceedsGrid { window: usize, extent: usize },
}

impl std::fmt::Display for FlagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagError::ShapeMismatch { expected, got } => write!(
                f,
                "mask shape ({}, {}) does not match grid shape ({}, {})",
                got.0, got.1, expected.0, expected.1
            ),
            FlagError::EmptyGrid => write!(f, "grid has a zero-length axis"),
            FlagError::NonPositiveChi { chi_1 } => {
                write!(f, "base threshold must be positive (chi_1 = {chi_1})")
            }
            FlagError::EmptyEtaList => write!(f, "sensitivity list is empty"),
            FlagError::NonPositiveEta { index, eta } => {
                write!(f, "sensitivity eta[{index}] = {eta} is not positive")
            }
            FlagError::ZeroKernel => write!(f, "smoothing kernel extent is zero"),
            FlagError::WindowExceedsGrid { window, extent } => write!(
                f,
                "window length {window} exceeds the largest grid extent {extent}"
            ),
        }
    }
}

impl std::error::Error for FlagError {}
