// Combo engine configuration

use super::history::DEFAULT_HISTORY_THRESHOLD;

/// Smallest watermark used to size history truncation
pub const DEFAULT_MIN_WATERMARK: usize = 2;

/// How registered combos are matched against input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Match every combo against the tail of one shared history.
    /// A match clears the history for everyone.
    #[default]
    SharedHistory,

    /// Track in-flight candidates per combo, each with its own expiry.
    /// Combos cannot consume each other's progress.
    Trackers,
}

/// Tunables for a `ComboManager`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboConfig {
    /// History length above which old entries are dropped
    pub history_threshold: usize,

    /// Lower bound for the longest-sequence watermark
    pub min_watermark: usize,

    /// Matching strategy
    pub mode: MatchMode,
}

impl ComboConfig {
    pub fn new() -> Self {
        Self {
            history_threshold: DEFAULT_HISTORY_THRESHOLD,
            min_watermark: DEFAULT_MIN_WATERMARK,
            mode: MatchMode::default(),
        }
    }

    /// Set the truncation threshold (at least 1)
    pub fn with_history_threshold(mut self, threshold: usize) -> Self {
        self.history_threshold = threshold.max(1);
        self
    }

    /// Set the watermark floor (at least 1)
    pub fn with_min_watermark(mut self, min_watermark: usize) -> Self {
        self.min_watermark = min_watermark.max(1);
        self
    }

    /// Set the matching strategy
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self::new()
    }
}
