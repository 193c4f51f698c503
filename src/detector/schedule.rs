//! Window-length schedule and per-window thresholds.
//!
//! Windows double from 1 up to a configured cap. The threshold for window
//! `2^k` is `chi_1 / p^k` for decay base `p`: it falls slower than `1/w`,
//! so broad interference is caught at aggregate power well below the
//! single-sample threshold without flagging every noisy-but-clean region.

/// One window length with its pre-scaled threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleEntry {
    /// Window length in samples.
    pub window: usize,
    /// Base threshold for this window, before η scaling.
    pub chi: f32,
}

/// Ascending sequence of window lengths with thresholds.
#[derive(Clone, Debug)]
pub struct ThresholdSchedule {
    entries: Vec<ScheduleEntry>,
}

impl ThresholdSchedule {
    /// Doubling windows `1, 2, 4, …` capped at `max_window` and at the
    /// largest grid extent; a window that fits neither axis can never be
    /// evaluated and is dropped here.
    pub fn doubling(chi_1: f32, decay_base: f32, max_window: usize, largest_extent: usize) -> Self {
        let mut entries = Vec::new();
        let mut window = 1usize;
        let mut chi = chi_1;
        while window <= max_window && window <= largest_extent {
            entries.push(ScheduleEntry { window, chi });
            window *= 2;
            chi /= decay_base;
        }
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_double_and_thresholds_decay() {
        let s = ThresholdSchedule::doubling(1000.0, 2.0, 8, 100);
        let windows: Vec<usize> = s.entries().iter().map(|e| e.window).collect();
        assert_eq!(windows, vec![1, 2, 4, 8]);
        assert_eq!(s.entries()[0].chi, 1000.0);
        assert_eq!(s.entries()[3].chi, 125.0);
    }

    #[test]
    fn windows_beyond_the_grid_are_dropped() {
        let s = ThresholdSchedule::doubling(1000.0, 1.5, 64, 5);
        let windows: Vec<usize> = s.entries().iter().map(|e| e.window).collect();
        assert_eq!(windows, vec![1, 2, 4]);
    }
}
