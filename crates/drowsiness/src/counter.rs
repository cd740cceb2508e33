//! Consecutive-frame hysteresis counter

/// Debounce counter requiring a condition to hold for N consecutive frames.
///
/// The count increments by one for each frame the condition holds and resets
/// to zero the moment it does not; "triggered" means the current run of
/// holding frames has reached the threshold. A single noisy frame therefore
/// never fires an alert on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HysteresisCounter {
    count: u32,
    threshold: u32,
}

impl HysteresisCounter {
    /// Create a counter with the given trigger threshold
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold,
        }
    }

    /// Advance the counter by one frame.
    ///
    /// Increments (saturating) when the condition holds, resets to zero
    /// otherwise. Returns whether the counter is triggered after the update.
    pub fn update(&mut self, holds: bool) -> bool {
        if holds {
            self.count = self.count.saturating_add(1);
        } else {
            self.count = 0;
        }
        self.is_triggered()
    }

    /// Force the count back to zero.
    ///
    /// Used when a higher-priority condition preempts this one for a frame
    /// (no face visible suppresses eye/mouth evaluation entirely).
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Replace the trigger threshold; the count is left untouched, so a
    /// lowered threshold can take effect mid-run.
    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold;
    }

    /// Whether the current run has reached the threshold
    pub fn is_triggered(&self) -> bool {
        self.count >= self.threshold
    }

    /// Current consecutive-frame count
    pub fn count(&self) -> u32 {
        self.count
    }
}
