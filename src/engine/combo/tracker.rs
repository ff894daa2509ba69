// Per-combo in-flight candidates, used by `MatchMode::Trackers`

use super::definition::Combo;
use super::handle::ComboHandle;
use crate::engine::input::Action;
use std::collections::{BTreeMap, HashMap};

/// One candidate match of one combo, started on one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracker {
    pub handle: ComboHandle,
    /// Number of sequence actions matched so far
    pub position: usize,
    pub started_at: f64,
}

/// Live trackers plus the index of which combos each action can start
#[derive(Debug, Default)]
pub struct TrackerSet {
    trackers: Vec<Tracker>,
    starters: HashMap<Action, Vec<ComboHandle>>,
}

impl TrackerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a newly registered combo by its first action
    pub fn add_starter(&mut self, handle: ComboHandle, combo: &Combo) {
        self.starters
            .entry(combo.starter().clone())
            .or_default()
            .push(handle);
    }

    /// Forget a removed combo and drop its trackers
    pub fn remove_combo(&mut self, handle: ComboHandle, combo: &Combo) {
        if let Some(handles) = self.starters.get_mut(combo.starter()) {
            handles.retain(|h| *h != handle);
            if handles.is_empty() {
                self.starters.remove(combo.starter());
            }
        }
        self.trackers.retain(|t| t.handle != handle);
    }

    /// Combos that start with `action`, in registration order
    pub fn starters_for(&self, action: &Action) -> &[ComboHandle] {
        self.starters
            .get(action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Drop trackers whose combo interval has run out
    pub fn expire(&mut self, now: f64, combos: &BTreeMap<ComboHandle, Combo>) {
        self.trackers.retain(|tracker| {
            combos
                .get(&tracker.handle)
                .is_some_and(|combo| now - tracker.started_at <= combo.interval())
        });
    }

    /// Feed one pressed action to every tracker and start new ones
    ///
    /// Trackers expecting a different action are discarded. Returns the
    /// combos completed by this press; their remaining trackers are dropped so
    /// one run of input completes a combo once.
    pub fn advance(
        &mut self,
        action: &Action,
        now: f64,
        combos: &BTreeMap<ComboHandle, Combo>,
    ) -> Vec<ComboHandle> {
        let mut completed = Vec::new();

        self.trackers.retain_mut(|tracker| {
            let Some(combo) = combos.get(&tracker.handle) else {
                return false;
            };
            if combo.sequence()[tracker.position] != *action {
                return false;
            }
            tracker.position += 1;
            if tracker.position == combo.len() {
                completed.push(tracker.handle);
                return false;
            }
            true
        });

        if let Some(handles) = self.starters.get(action) {
            for &handle in handles {
                let Some(combo) = combos.get(&handle) else {
                    continue;
                };
                if combo.len() == 1 {
                    completed.push(handle);
                } else {
                    self.trackers.push(Tracker {
                        handle,
                        position: 1,
                        started_at: now,
                    });
                }
            }
        }

        if !completed.is_empty() {
            self.trackers.retain(|t| !completed.contains(&t.handle));
        }
        completed
    }

    /// Drop all live trackers, keeping the starter index
    pub fn clear(&mut self) {
        self.trackers.clear();
    }

    /// Number of live trackers
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    /// Check if no trackers are live
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Number of distinct starting actions
    pub fn starter_count(&self) -> usize {
        self.starters.len()
    }
}
