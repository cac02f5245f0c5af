//! Action definitions: a named, state-scoped route to a target state.

use super::hooks::{Hook, Hooks};
use super::ActionEvent;
use std::fmt;
use std::sync::Arc;

/// One action available from a state.
///
/// The target state is required. Hooks and the body are optional and only
/// run when present.
///
/// # Example
///
/// ```rust
/// use actionfsm::core::{ActionDefinition, ActionEvent};
/// use std::convert::Infallible;
///
/// let inc: ActionDefinition<u32, Infallible> = ActionDefinition::new("two")
///     .body(|counter: &mut u32, _: &ActionEvent<'_>| {
///         *counter += 1;
///         Ok(())
///     });
///
/// assert_eq!(inc.target_state(), "two");
/// assert!(inc.has_body());
/// ```
pub struct ActionDefinition<C, E> {
    pub(crate) target_state: String,
    pub(crate) hooks: Hooks<C, E>,
    pub(crate) body: Option<Hook<C, E>>,
}

impl<C, E> ActionDefinition<C, E> {
    /// Create an action that moves the machine to `target_state`.
    pub fn new(target_state: impl Into<String>) -> Self {
        Self {
            target_state: target_state.into(),
            hooks: Hooks::new(),
            body: None,
        }
    }

    /// Set the action-scoped enter hook.
    pub fn on_action_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.hooks.on_action_enter = Some(Arc::new(f));
        self
    }

    /// Set the action-scoped exit hook.
    pub fn on_action_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.hooks.on_action_exit = Some(Arc::new(f));
        self
    }

    /// Set the effectful body, run after the enter hooks and before the
    /// machine commits to the target state.
    pub fn body<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.body = Some(Arc::new(f));
        self
    }

    pub fn target_state(&self) -> &str {
        &self.target_state
    }

    pub fn hooks(&self) -> &Hooks<C, E> {
        &self.hooks
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl<C, E> Clone for ActionDefinition<C, E> {
    fn clone(&self) -> Self {
        Self {
            target_state: self.target_state.clone(),
            hooks: self.hooks.clone(),
            body: self.body.clone(),
        }
    }
}

impl<C, E> fmt::Debug for ActionDefinition<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDefinition")
            .field("target_state", &self.target_state)
            .field("hooks", &self.hooks)
            .field("body", &self.has_body())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_action_has_only_a_target() {
        let action: ActionDefinition<(), ()> = ActionDefinition::new("two");

        assert_eq!(action.target_state(), "two");
        assert!(!action.has_body());
        assert!(!action.hooks().has_enter());
        assert!(!action.hooks().has_exit());
    }

    #[test]
    fn fluent_setters_attach_callbacks() {
        let action: ActionDefinition<Vec<&'static str>, ()> = ActionDefinition::new("two")
            .on_action_enter(|log: &mut Vec<&'static str>, _: &ActionEvent<'_>| {
                log.push("enter");
                Ok(())
            })
            .body(|log: &mut Vec<&'static str>, _: &ActionEvent<'_>| {
                log.push("body");
                Ok(())
            })
            .on_action_exit(|log: &mut Vec<&'static str>, _: &ActionEvent<'_>| {
                log.push("exit");
                Ok(())
            });

        assert!(action.has_body());
        assert!(action.hooks().has_enter());
        assert!(action.hooks().has_exit());

        let event = ActionEvent {
            action: "inc",
            from: "one",
            to: "two",
        };
        let mut log = Vec::new();
        action.hooks().enter(&mut log, &event).unwrap();
        (action.body.as_ref().unwrap())(&mut log, &event).unwrap();
        action.hooks().exit(&mut log, &event).unwrap();

        assert_eq!(log, vec!["enter", "body", "exit"]);
    }

    #[test]
    fn debug_output_omits_callbacks() {
        let action: ActionDefinition<(), ()> = ActionDefinition::new("done");
        let rendered = format!("{:?}", action);

        assert!(rendered.contains("target_state: \"done\""));
        assert!(rendered.contains("body: false"));
    }
}
