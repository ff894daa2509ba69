// Combo manager - registration and per-frame matching

use super::config::{ComboConfig, MatchMode};
use super::definition::Combo;
use super::handle::{ComboHandle, HandleAllocator};
use super::history::{HistoryEntry, InputHistory};
use super::tracker::TrackerSet;
use super::Result;
use crate::engine::clock::Clock;
use crate::engine::input::{Action, ActionRegistry, PressedQuery};
use std::collections::BTreeMap;

/// Detects registered combos in the per-frame input stream
///
/// Call [`ComboManager::update`] exactly once per frame. Every action known to
/// the [`ActionRegistry`] is sampled, pressed ones are appended to the shared
/// history with the frame's timestamp, and each combo is checked in
/// registration order.
pub struct ComboManager {
    config: ComboConfig,

    /// Universe of actions sampled every frame
    actions: ActionRegistry,

    /// Time source for press timestamps
    clock: Box<dyn Clock>,

    /// Registered combos, ordered by handle (registration order)
    combos: BTreeMap<ComboHandle, Combo>,

    handles: HandleAllocator,

    /// Recently pressed actions, oldest first
    history: InputHistory,

    /// In-flight candidates for `MatchMode::Trackers`
    trackers: TrackerSet,

    /// Longest sequence ever registered (never shrinks)
    watermark: usize,
}

impl ComboManager {
    /// Create a manager with the default configuration
    pub fn new(actions: ActionRegistry, clock: impl Clock + 'static) -> Self {
        Self::with_config(actions, clock, ComboConfig::default())
    }

    /// Create a manager with a custom configuration
    pub fn with_config(
        actions: ActionRegistry,
        clock: impl Clock + 'static,
        config: ComboConfig,
    ) -> Self {
        Self {
            config,
            actions,
            clock: Box::new(clock),
            combos: BTreeMap::new(),
            handles: HandleAllocator::default(),
            history: InputHistory::new(),
            trackers: TrackerSet::new(),
            watermark: config.min_watermark,
        }
    }

    /// Register a combo
    ///
    /// `callback` runs once each time `sequence` is pressed in order within
    /// `interval` seconds. Fails on an empty sequence or a non-positive
    /// interval.
    pub fn register<I, A, F>(&mut self, sequence: I, interval: f64, callback: F) -> Result<ComboHandle>
    where
        I: IntoIterator<Item = A>,
        A: Into<Action>,
        F: FnMut() + 'static,
    {
        let sequence: Vec<Action> = sequence.into_iter().map(Into::into).collect();
        let combo = Combo::new(sequence, interval, Box::new(callback))?;
        let handle = self.handles.allocate();

        self.watermark = self.watermark.max(combo.len());
        self.trackers.add_starter(handle, &combo);
        log::debug!(
            "Registered {} ({} actions, {}s)",
            handle,
            combo.len(),
            combo.interval()
        );
        self.combos.insert(handle, combo);

        Ok(handle)
    }

    /// Remove a combo. Unknown handles are ignored.
    pub fn deregister(&mut self, handle: ComboHandle) {
        if let Some(combo) = self.combos.remove(&handle) {
            self.trackers.remove_combo(handle, &combo);
            log::debug!("Deregistered {}", handle);
        }
    }

    /// Sample this frame's input and fire any completed combos
    pub fn update<Q: PressedQuery + ?Sized>(&mut self, input: &Q) {
        if self.combos.is_empty() {
            return;
        }

        let now = self.clock.now();
        let pressed = self.actions.sample(input);
        for action in &pressed {
            self.history.push(action.clone(), now);
        }

        if self.history.len() > self.config.history_threshold {
            let dropped = self.history.truncate_to_recent(self.watermark);
            log::trace!("Truncated {} history entries", dropped);
        }

        match self.config.mode {
            MatchMode::SharedHistory => self.match_history(),
            MatchMode::Trackers => self.match_trackers(&pressed, now),
        }
    }

    fn match_history(&mut self) {
        for (handle, combo) in self.combos.iter_mut() {
            if self.history.matches_tail(combo.sequence(), combo.interval()) {
                log::debug!("Combo {} completed", handle);
                combo.fire();
                self.history.clear();
            }
        }
    }

    fn match_trackers(&mut self, pressed: &[Action], now: f64) {
        self.trackers.expire(now, &self.combos);

        let mut completed = Vec::new();
        for action in pressed {
            completed.extend(self.trackers.advance(action, now, &self.combos));
        }
        completed.sort();
        completed.dedup();

        for handle in completed {
            if let Some(combo) = self.combos.get_mut(&handle) {
                log::debug!("Combo {} completed", handle);
                combo.fire();
            }
        }
    }

    /// Drop all recorded input and in-flight trackers
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.trackers.clear();
    }

    /// Check whether a handle is still registered
    pub fn contains(&self, handle: ComboHandle) -> bool {
        self.combos.contains_key(&handle)
    }

    /// Look up a registered combo
    pub fn combo(&self, handle: ComboHandle) -> Option<&Combo> {
        self.combos.get(&handle)
    }

    /// Number of registered combos
    pub fn combo_count(&self) -> usize {
        self.combos.len()
    }

    /// Retention size used when the history is truncated
    pub fn watermark(&self) -> usize {
        self.watermark
    }

    /// Recorded presses, oldest first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Number of recorded presses
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of in-flight trackers (tracker mode only)
    pub fn tracker_count(&self) -> usize {
        self.trackers.len()
    }

    /// Number of distinct actions that start a registered combo
    pub fn starter_count(&self) -> usize {
        self.trackers.starter_count()
    }

    pub fn config(&self) -> &ComboConfig {
        &self.config
    }
}
