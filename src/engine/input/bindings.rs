// Binding raw input sources to named actions

use super::action::{default_bindings, Action, InputSource};
use super::registry::ActionRegistry;
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to actions
///
/// Every bound action is announced to the shared [`ActionRegistry`], which is
/// how the combo engine learns which actions exist.
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Registry that receives every bound action
    registry: ActionRegistry,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputBindings {
    /// Create an empty binding table feeding `registry`
    pub fn new(registry: ActionRegistry) -> Self {
        Self {
            registry,
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a binding table with the default layout
    pub fn with_defaults(registry: ActionRegistry) -> Self {
        Self::from_bindings(registry, default_bindings())
    }

    /// Create a binding table from a list of bindings
    pub fn from_bindings(registry: ActionRegistry, bindings: Vec<(InputSource, Action)>) -> Self {
        let mut table = Self::new(registry);
        for (source, action) in bindings {
            table.bind(source, action);
        }
        table
    }

    /// Registry this table feeds
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: impl Into<Action>) {
        let action = action.into();

        // A source maps to a single action
        self.unbind_source(source);

        self.registry.register(action.clone());
        self.bindings.insert(source, action.clone());
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    ///
    /// The action stays known to the registry.
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: &Action) {
        if let Some(sources) = self.action_to_sources.remove(action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<&Action> {
        self.bindings.get(&source)
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: &Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an input source is bound to any action
    pub fn is_bound(&self, source: InputSource) -> bool {
        self.bindings.contains_key(&source)
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: &Action) -> bool {
        self.action_to_sources.contains_key(action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to the default layout
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in default_bindings() {
            self.bind(source, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn bindings() -> InputBindings {
        InputBindings::new(ActionRegistry::new())
    }

    #[test]
    fn test_bind_action() {
        let mut table = bindings();
        let source = InputSource::key(KeyCode::KeyA);
        table.bind(source, "left");

        assert_eq!(table.get_action(source), Some(&Action::new("left")));
    }

    #[test]
    fn test_bind_announces_action() {
        let registry = ActionRegistry::new();
        let mut table = InputBindings::new(registry.clone());
        table.bind(InputSource::key(KeyCode::KeyJ), "punch");

        assert!(registry.contains(&Action::new("punch")));
    }

    #[test]
    fn test_unbind_source_keeps_action_known() {
        let registry = ActionRegistry::new();
        let mut table = InputBindings::new(registry.clone());
        let source = InputSource::key(KeyCode::KeyA);
        table.bind(source, "left");
        table.unbind_source(source);

        assert_eq!(table.get_action(source), None);
        assert!(!table.has_binding(&Action::new("left")));
        assert!(registry.contains(&Action::new("left")));
    }

    #[test]
    fn test_unbind_action() {
        let mut table = bindings();
        let source1 = InputSource::key(KeyCode::KeyA);
        let source2 = InputSource::key(KeyCode::ArrowLeft);

        table.bind(source1, "left");
        table.bind(source2, "left");
        table.unbind_action(&Action::new("left"));

        assert_eq!(table.get_action(source1), None);
        assert_eq!(table.get_action(source2), None);
    }

    #[test]
    fn test_get_sources() {
        let mut table = bindings();
        let source1 = InputSource::key(KeyCode::KeyA);
        let source2 = InputSource::key(KeyCode::ArrowLeft);

        table.bind(source1, "left");
        table.bind(source2, "left");

        let sources = table.get_sources(&Action::new("left"));
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&source1));
        assert!(sources.contains(&source2));
    }

    #[test]
    fn test_rebind_source() {
        let mut table = bindings();
        let source = InputSource::key(KeyCode::KeyA);

        table.bind(source, "left");
        table.bind(source, "right");

        assert_eq!(table.get_action(source), Some(&Action::new("right")));
        assert!(!table.has_binding(&Action::new("left")));
    }

    #[test]
    fn test_is_bound() {
        let mut table = bindings();
        let source = InputSource::key(KeyCode::KeyA);

        assert!(!table.is_bound(source));
        table.bind(source, "left");
        assert!(table.is_bound(source));
    }

    #[test]
    fn test_defaults_populate_registry() {
        let registry = ActionRegistry::new();
        let table = InputBindings::with_defaults(registry.clone());

        assert!(table.has_binding(&Action::new("up")));
        assert!(registry.contains(&Action::new("kick")));
        // "up" is bound twice but known once
        assert_eq!(
            registry.actions().iter().filter(|a| a.as_str() == "up").count(),
            1
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut table = bindings();
        table.bind(InputSource::key(KeyCode::KeyZ), "taunt");
        table.reset_to_defaults();

        assert!(!table.is_bound(InputSource::key(KeyCode::KeyZ)));
        assert!(table.has_binding(&Action::new("jump")));
    }
}
