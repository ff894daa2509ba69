// Combo detection
//
// Watches the pressed actions of every frame and fires a callback when a
// registered sequence is completed within its time budget.

mod config;
mod definition;
mod handle;
mod history;
mod manager;
mod tracker;

pub use config::{ComboConfig, MatchMode, DEFAULT_MIN_WATERMARK};
pub use definition::{Combo, ComboCallback};
pub use handle::ComboHandle;
pub use history::{HistoryEntry, InputHistory, DEFAULT_HISTORY_THRESHOLD};
pub use manager::ComboManager;
pub use tracker::{Tracker, TrackerSet};

/// Combo registration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComboError {
    #[error("Combo sequence must contain at least one action")]
    EmptySequence,

    #[error("Combo interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f64),
}

pub type Result<T> = std::result::Result<T, ComboError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_error_display() {
        assert_eq!(
            ComboError::EmptySequence.to_string(),
            "Combo sequence must contain at least one action"
        );
        assert_eq!(
            ComboError::InvalidInterval(-1.0).to_string(),
            "Combo interval must be a positive number of seconds, got -1"
        );
    }
}
