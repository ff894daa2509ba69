// Shared universe of actions the combo engine watches

use super::action::Action;
use super::state::PressedQuery;
use std::cell::RefCell;
use std::rc::Rc;

/// The set of distinct actions known to the game
///
/// Cloning an `ActionRegistry` yields another handle to the same list, so the
/// binding layer can keep announcing actions while the combo engine reads them
/// every frame. Actions are kept in first-seen order and never removed.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: Rc<RefCell<Vec<Action>>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `actions`
    pub fn from_actions<I, A>(actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Action>,
    {
        let registry = Self::new();
        for action in actions {
            registry.register(action);
        }
        registry
    }

    /// Announce an action. Returns false if it was already known.
    pub fn register(&self, action: impl Into<Action>) -> bool {
        let action = action.into();
        let mut actions = self.actions.borrow_mut();
        if actions.contains(&action) {
            return false;
        }
        log::trace!("Action registered: {}", action);
        actions.push(action);
        true
    }

    /// Check whether an action is known
    pub fn contains(&self, action: &Action) -> bool {
        self.actions.borrow().contains(action)
    }

    /// Number of known actions
    pub fn len(&self) -> usize {
        self.actions.borrow().len()
    }

    /// Check if no actions are known
    pub fn is_empty(&self) -> bool {
        self.actions.borrow().is_empty()
    }

    /// Snapshot of the known actions in registration order
    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    /// Query every known action and return the ones pressed this frame,
    /// in registration order
    pub fn sample<Q: PressedQuery + ?Sized>(&self, input: &Q) -> Vec<Action> {
        self.actions
            .borrow()
            .iter()
            .filter(|action| input.just_pressed(action))
            .cloned()
            .collect()
    }
}
