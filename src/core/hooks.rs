//! Lifecycle hooks invoked around a transition.
//!
//! Hooks are plain callbacks stored behind an `Arc` so that definitions can be
//! cloned cheaply. Every hook receives the shared invocation context (the
//! caller's data) and the [`ActionEvent`] describing the transition.

use std::fmt;
use std::sync::Arc;

/// The `(action, from, to)` triple handed to every hook and action body.
///
/// `from` is always the state the action was taken in, even for exit hooks
/// that run after the machine has already moved to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionEvent<'a> {
    /// The action being executed
    pub action: &'a str,
    /// The state the action was taken in
    pub from: &'a str,
    /// The action's target state
    pub to: &'a str,
}

impl fmt::Display for ActionEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.action, self.to)
    }
}

/// Callback run around (or as the body of) a transition.
///
/// The first argument is the shared invocation context: mutations made by one
/// callback are visible to every later callback in the same call and to
/// subsequent calls.
pub type Hook<C, E> = Arc<dyn Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync>;

/// Wrap a closure as a [`Hook`].
///
/// # Example
///
/// ```rust
/// use actionfsm::core::{hook, ActionEvent, Hook};
/// use std::convert::Infallible;
///
/// let count_calls: Hook<u32, Infallible> = hook(|calls: &mut u32, _event: &ActionEvent<'_>| {
///     *calls += 1;
///     Ok(())
/// });
///
/// let mut calls = 0;
/// let event = ActionEvent { action: "inc", from: "one", to: "two" };
/// count_calls(&mut calls, &event).unwrap();
/// assert_eq!(calls, 1);
/// ```
pub fn hook<C, E, F>(f: F) -> Hook<C, E>
where
    F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A pair of optional enter/exit hooks attached to one scope.
pub struct Hooks<C, E> {
    pub(crate) on_action_enter: Option<Hook<C, E>>,
    pub(crate) on_action_exit: Option<Hook<C, E>>,
}

impl<C, E> Hooks<C, E> {
    /// An empty pair; nothing runs.
    pub fn new() -> Self {
        Self {
            on_action_enter: None,
            on_action_exit: None,
        }
    }

    /// Run the enter hook if one is set.
    pub fn enter(&self, data: &mut C, event: &ActionEvent<'_>) -> Result<(), E> {
        invoke(self.on_action_enter.as_ref(), data, event)
    }

    /// Run the exit hook if one is set.
    pub fn exit(&self, data: &mut C, event: &ActionEvent<'_>) -> Result<(), E> {
        invoke(self.on_action_exit.as_ref(), data, event)
    }

    pub fn has_enter(&self) -> bool {
        self.on_action_enter.is_some()
    }

    pub fn has_exit(&self) -> bool {
        self.on_action_exit.is_some()
    }
}

/// Invoke an optional callback; absent callbacks are a no-op.
pub(crate) fn invoke<C, E>(
    hook: Option<&Hook<C, E>>,
    data: &mut C,
    event: &ActionEvent<'_>,
) -> Result<(), E> {
    hook.map_or(Ok(()), |hook| hook(data, event))
}

impl<C, E> Default for Hooks<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> Clone for Hooks<C, E> {
    fn clone(&self) -> Self {
        Self {
            on_action_enter: self.on_action_enter.clone(),
            on_action_exit: self.on_action_exit.clone(),
        }
    }
}

impl<C, E> fmt::Debug for Hooks<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_action_enter", &self.has_enter())
            .field("on_action_exit", &self.has_exit())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT: ActionEvent<'static> = ActionEvent {
        action: "inc",
        from: "one",
        to: "two",
    };

    #[test]
    fn empty_hooks_do_nothing() {
        let hooks: Hooks<Vec<String>, String> = Hooks::new();
        let mut log = Vec::new();

        assert!(hooks.enter(&mut log, &EVENT).is_ok());
        assert!(hooks.exit(&mut log, &EVENT).is_ok());
        assert!(log.is_empty());
        assert!(!hooks.has_enter());
        assert!(!hooks.has_exit());
    }

    #[test]
    fn present_hooks_receive_context_and_event() {
        let hooks: Hooks<Vec<String>, String> = Hooks {
            on_action_enter: Some(hook(|log: &mut Vec<String>, e: &ActionEvent<'_>| {
                log.push(format!("enter {}", e));
                Ok(())
            })),
            on_action_exit: Some(hook(|log: &mut Vec<String>, e: &ActionEvent<'_>| {
                log.push(format!("exit {}", e));
                Ok(())
            })),
        };
        let mut log = Vec::new();

        hooks.enter(&mut log, &EVENT).unwrap();
        hooks.exit(&mut log, &EVENT).unwrap();

        assert_eq!(log, vec!["enter one --inc--> two", "exit one --inc--> two"]);
    }

    #[test]
    fn hook_errors_are_returned_unchanged() {
        let hooks: Hooks<(), String> = Hooks {
            on_action_enter: Some(hook(|_: &mut (), _: &ActionEvent<'_>| {
                Err("denied".to_string())
            })),
            on_action_exit: None,
        };

        assert_eq!(hooks.enter(&mut (), &EVENT), Err("denied".to_string()));
    }

    #[test]
    fn cloned_hooks_share_callbacks() {
        let hooks: Hooks<u32, ()> = Hooks {
            on_action_enter: Some(hook(|n: &mut u32, _: &ActionEvent<'_>| {
                *n += 1;
                Ok(())
            })),
            on_action_exit: None,
        };
        let cloned = hooks.clone();
        let mut n = 0;

        hooks.enter(&mut n, &EVENT).unwrap();
        cloned.enter(&mut n, &EVENT).unwrap();

        assert_eq!(n, 2);
        assert!(cloned.has_enter());
    }
}
