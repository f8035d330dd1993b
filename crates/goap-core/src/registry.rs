use std::collections::BTreeMap;

use crate::Action;

/// Name-keyed set of available actions.
///
/// Populate it once, then share it by reference (or `Arc`) with planners and executors. Actions
/// are enumerated in name order so planning is reproducible.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` under `name`, replacing any previous action with that name.
    pub fn register(&mut self, name: impl Into<String>, action: impl Action) -> &mut Self {
        let name = name.into();
        if self.actions.insert(name.clone(), Box::new(action)).is_some() {
            tracing::warn!(action = %name, "Replaced previously registered action");
        }
        self
    }

    pub fn with(mut self, name: impl Into<String>, action: impl Action) -> Self {
        self.register(name, action);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|a| a.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.keys().map(|k| k.as_str())
    }

    /// All `(name, action)` pairs in name order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &dyn Action)> + '_ {
        self.actions.iter().map(|(k, a)| (k.as_str(), a.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Action)> + '_ {
        self.all()
    }
}

impl core::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
