//! Per-TLD batch progress counters

use serde::Serialize;

/// Counters for one TLD's run. Process-lifetime only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TldProgress {
    /// Combinations this TLD will check
    pub total: u64,
    /// Combinations included in completed batches
    pub checked: u64,
    /// `checked` at the last save
    pub last_saved: u64,
    pub batches: u64,
    pub failed_batches: u64,
    pub saves: u64,
}

impl TldProgress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Record a completed batch of `size` combinations.
    pub fn record_batch(&mut self, size: usize, failed: bool) {
        self.checked += size as u64;
        self.batches += 1;
        if failed {
            self.failed_batches += 1;
        }
    }

    /// Whether pending names should be persisted now.
    pub fn save_due(&self, threshold: u64) -> bool {
        self.checked - self.last_saved >= threshold || self.checked == self.total
    }

    pub fn mark_saved(&mut self) {
        self.last_saved = self.checked;
        self.saves += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.checked >= self.total
    }

    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.checked as f64 / self.total as f64) * 100.0
        }
    }
}
