// A registered combo: sequence, time budget, callback

use super::{ComboError, Result};
use crate::engine::input::Action;
use std::fmt;

/// Callback invoked when a combo completes
pub type ComboCallback = Box<dyn FnMut()>;

/// An ordered action sequence that must be completed within `interval` seconds
pub struct Combo {
    sequence: Vec<Action>,
    interval: f64,
    callback: ComboCallback,
}

impl Combo {
    /// Validate and build a combo
    ///
    /// The sequence must not be empty and the interval must be a positive,
    /// finite number of seconds.
    pub fn new(sequence: Vec<Action>, interval: f64, callback: ComboCallback) -> Result<Self> {
        if sequence.is_empty() {
            return Err(ComboError::EmptySequence);
        }
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ComboError::InvalidInterval(interval));
        }
        Ok(Self {
            sequence,
            interval,
            callback,
        })
    }

    /// The actions to press, in order
    pub fn sequence(&self) -> &[Action] {
        &self.sequence
    }

    /// Maximum seconds between the first and last press
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of presses in the sequence
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false, combos cannot be built empty
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The action that starts this combo
    pub fn starter(&self) -> &Action {
        &self.sequence[0]
    }

    pub(crate) fn fire(&mut self) {
        (self.callback)();
    }
}

impl fmt::Debug for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combo")
            .field("sequence", &self.sequence)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn actions(names: &[&str]) -> Vec<Action> {
        names.iter().map(|n| Action::new(n)).collect()
    }

    #[test]
    fn test_combo_creation() {
        let combo = Combo::new(actions(&["up", "down"]), 0.5, Box::new(|| {})).unwrap();
        assert_eq!(combo.len(), 2);
        assert_eq!(combo.starter(), &Action::new("up"));
        assert_eq!(combo.interval(), 0.5);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let result = Combo::new(Vec::new(), 0.5, Box::new(|| {}));
        assert!(matches!(result, Err(ComboError::EmptySequence)));
    }

    #[test]
    fn test_bad_intervals_rejected() {
        for interval in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Combo::new(actions(&["up"]), interval, Box::new(|| {}));
            assert!(
                matches!(result, Err(ComboError::InvalidInterval(_))),
                "interval {} should be rejected",
                interval
            );
        }
    }

    #[test]
    fn test_fire_invokes_callback() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut combo = Combo::new(
            actions(&["kick"]),
            1.0,
            Box::new(move || counter.set(counter.get() + 1)),
        )
        .unwrap();

        combo.fire();
        combo.fire();
        assert_eq!(count.get(), 2);
    }
}
