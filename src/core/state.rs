//! State definitions: the actions available from a state plus its hooks.

use super::action::ActionDefinition;
use super::hooks::Hooks;
use super::ActionEvent;
use std::fmt;
use std::sync::Arc;

/// Definition of a single state.
///
/// Actions keep their insertion order. Adding an action whose identifier
/// already exists replaces the earlier definition in place.
///
/// # Example
///
/// ```rust
/// use actionfsm::core::{ActionDefinition, StateDefinition};
///
/// let idle: StateDefinition<(), ()> = StateDefinition::new()
///     .action("start", ActionDefinition::new("running"))
///     .action("stop", ActionDefinition::new("idle"));
///
/// assert_eq!(idle.action_names().collect::<Vec<_>>(), vec!["start", "stop"]);
/// assert_eq!(idle.targets(), vec!["running", "idle"]);
/// ```
pub struct StateDefinition<C, E> {
    pub(crate) actions: Vec<(String, ActionDefinition<C, E>)>,
    pub(crate) hooks: Hooks<C, E>,
}

impl<C, E> StateDefinition<C, E> {
    /// A state with no outgoing actions and no hooks.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            hooks: Hooks::new(),
        }
    }

    /// Add (or replace) an action.
    pub fn action(mut self, name: impl Into<String>, definition: ActionDefinition<C, E>) -> Self {
        self.insert_action(name.into(), definition);
        self
    }

    /// Set the state-scoped enter hook, run for every action taken from
    /// this state.
    pub fn on_action_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.hooks.on_action_enter = Some(Arc::new(f));
        self
    }

    /// Set the state-scoped exit hook, run for every action taken from
    /// this state.
    pub fn on_action_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.hooks.on_action_exit = Some(Arc::new(f));
        self
    }

    pub(crate) fn insert_action(&mut self, name: String, definition: ActionDefinition<C, E>) {
        match self.actions.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = definition,
            None => self.actions.push((name, definition)),
        }
    }

    /// Look up an action by identifier.
    pub fn get_action(&self, name: &str) -> Option<&ActionDefinition<C, E>> {
        self.actions
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, definition)| definition)
    }

    /// Action identifiers in insertion order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.iter().map(|(name, _)| name.as_str())
    }

    /// Deduplicated target states, in order of first appearance.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::with_capacity(self.actions.len());
        for (_, definition) in &self.actions {
            let target = definition.target_state();
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        targets
    }

    pub fn hooks(&self) -> &Hooks<C, E> {
        &self.hooks
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<C, E> Default for StateDefinition<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> Clone for StateDefinition<C, E> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

impl<C, E> fmt::Debug for StateDefinition<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("actions", &self.actions)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turnstile() -> StateDefinition<(), ()> {
        StateDefinition::new()
            .action("coin", ActionDefinition::new("unlocked"))
            .action("push", ActionDefinition::new("locked"))
    }

    #[test]
    fn empty_state_has_no_actions() {
        let state: StateDefinition<(), ()> = StateDefinition::new();

        assert!(state.is_empty());
        assert_eq!(state.action_names().count(), 0);
        assert!(state.targets().is_empty());
        assert!(state.get_action("anything").is_none());
    }

    #[test]
    fn actions_keep_insertion_order() {
        let state = turnstile();

        assert_eq!(state.action_names().collect::<Vec<_>>(), vec!["coin", "push"]);
        assert_eq!(state.get_action("coin").unwrap().target_state(), "unlocked");
    }

    #[test]
    fn re_adding_an_action_replaces_it_in_place() {
        let state = turnstile().action("coin", ActionDefinition::new("jammed"));

        assert_eq!(state.action_names().collect::<Vec<_>>(), vec!["coin", "push"]);
        assert_eq!(state.get_action("coin").unwrap().target_state(), "jammed");
    }

    #[test]
    fn targets_are_deduplicated() {
        let state: StateDefinition<(), ()> = StateDefinition::new()
            .action("a", ActionDefinition::new("x"))
            .action("b", ActionDefinition::new("y"))
            .action("c", ActionDefinition::new("x"));

        assert_eq!(state.targets(), vec!["x", "y"]);
    }

    #[test]
    fn state_hooks_are_optional() {
        let state: StateDefinition<u8, ()> =
            StateDefinition::new().on_action_exit(|_: &mut u8, _: &ActionEvent<'_>| Ok(()));

        assert!(!state.hooks().has_enter());
        assert!(state.hooks().has_exit());
    }
}
