// Rolling history of pressed actions

use crate::engine::input::Action;
use std::collections::VecDeque;

/// Length above which the history is truncated
pub const DEFAULT_HISTORY_THRESHOLD: usize = 100;

/// A single pressed action and the frame time it was seen at
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub action: Action,
    pub timestamp: f64,
}

/// Time-ordered log of recently pressed actions, oldest first
///
/// All combos are matched against the tail of this one log.
#[derive(Debug, Default)]
pub struct InputHistory {
    entries: VecDeque<HistoryEntry>,
}

impl InputHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_THRESHOLD),
        }
    }

    /// Record a press
    pub fn push(&mut self, action: Action, timestamp: f64) {
        self.entries.push_back(HistoryEntry { action, timestamp });
    }

    /// Drop the oldest entries so that at most `keep` remain
    /// Returns the number of entries dropped
    pub fn truncate_to_recent(&mut self, keep: usize) -> usize {
        let excess = self.entries.len().saturating_sub(keep);
        self.entries.drain(..excess);
        excess
    }

    /// Check whether the last `sequence.len()` entries are exactly `sequence`
    /// and span no more than `interval` seconds
    pub fn matches_tail(&self, sequence: &[Action], interval: f64) -> bool {
        let k = sequence.len();
        if k == 0 || self.entries.len() < k {
            return false;
        }

        let start = self.entries.len() - k;
        let tail = self.entries.range(start..);
        if !tail.map(|entry| &entry.action).eq(sequence.iter()) {
            return false;
        }

        let first = self.entries[start].timestamp;
        let last = self.entries[self.entries.len() - 1].timestamp;
        last - first <= interval
    }

    /// Clear the whole history
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterate entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(names: &[&str]) -> Vec<Action> {
        names.iter().map(|n| Action::new(n)).collect()
    }

    fn history(presses: &[(&str, f64)]) -> InputHistory {
        let mut history = InputHistory::new();
        for (name, timestamp) in presses {
            history.push(Action::new(name), *timestamp);
        }
        history
    }

    #[test]
    fn test_history_creation() {
        let history = InputHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_push_keeps_order() {
        let history = history(&[("up", 0.0), ("down", 0.1)]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|e| e.action.as_str()), Some("down"));
        let first = history.iter().next().unwrap();
        assert_eq!(first.action, Action::new("up"));
    }

    #[test]
    fn test_push_keeps_duplicates() {
        let history = history(&[("up", 0.0), ("up", 0.1)]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_truncate_keeps_most_recent() {
        let mut history = history(&[("a", 0.0), ("b", 0.1), ("c", 0.2), ("d", 0.3)]);
        let dropped = history.truncate_to_recent(2);
        assert_eq!(dropped, 2);
        let names: Vec<_> = history.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(names, vec!["c", "d"]);
    }

    #[test]
    fn test_truncate_shorter_history_is_noop() {
        let mut history = history(&[("a", 0.0)]);
        assert_eq!(history.truncate_to_recent(4), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_matches_exact_tail() {
        let history = history(&[("kick", 0.0), ("up", 1.0), ("up", 1.1), ("down", 1.2)]);
        assert!(history.matches_tail(&actions(&["up", "up", "down"]), 0.5));
        assert!(history.matches_tail(&actions(&["down"]), 0.5));
    }

    #[test]
    fn test_rejects_wrong_order() {
        let history = history(&[("down", 0.0), ("up", 0.0)]);
        assert!(!history.matches_tail(&actions(&["up", "down"]), 1.0));
    }

    #[test]
    fn test_rejects_non_contiguous_tail() {
        let history = history(&[("up", 0.0), ("kick", 0.0), ("down", 0.0)]);
        assert!(!history.matches_tail(&actions(&["up", "down"]), 1.0));
    }

    #[test]
    fn test_rejects_short_history() {
        let history = history(&[("down", 0.0)]);
        assert!(!history.matches_tail(&actions(&["up", "down"]), 1.0));
    }

    #[test]
    fn test_interval_bound_is_inclusive() {
        let history = history(&[("up", 0.0), ("down", 0.25), ("kick", 0.5)]);
        let sequence = actions(&["up", "down", "kick"]);
        assert!(history.matches_tail(&sequence, 0.5));
        assert!(!history.matches_tail(&sequence, 0.25));
    }

    #[test]
    fn test_only_tail_span_counts() {
        // The old "up" is outside the matched tail and must not stretch the span
        let history = history(&[("up", 0.0), ("up", 10.0), ("down", 10.1)]);
        assert!(history.matches_tail(&actions(&["up", "down"]), 0.5));
    }

    #[test]
    fn test_clear() {
        let mut history = history(&[("up", 0.0), ("down", 0.1)]);
        history.clear();
        assert!(history.is_empty());
    }
}
