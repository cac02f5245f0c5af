//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a table macro for creating
//! state machines with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::FsmBuilder;

use crate::core::{ActionDefinition, StateDefinition};

/// Create a state whose actions carry no hooks.
///
/// # Example
///
/// ```
/// use actionfsm::builder::simple_state;
/// use actionfsm::core::StateDefinition;
///
/// let red: StateDefinition<(), ()> = simple_state([("next", "green"), ("off", "dark")]);
///
/// assert_eq!(red.targets(), vec!["green", "dark"]);
/// ```
pub fn simple_state<C, E, A, T>(actions: impl IntoIterator<Item = (A, T)>) -> StateDefinition<C, E>
where
    A: Into<String>,
    T: Into<String>,
{
    actions
        .into_iter()
        .fold(StateDefinition::new(), |state, (action, target)| {
            state.action(action, ActionDefinition::new(target))
        })
}

/// Create a state with a single action that loops back to `state`.
///
/// Such a state is final: every reachable state is itself.
///
/// # Example
///
/// ```
/// use actionfsm::builder::looping_state;
/// use actionfsm::core::StateDefinition;
///
/// let done: StateDefinition<(), ()> = looping_state("done", "ack");
///
/// assert_eq!(done.targets(), vec!["done"]);
/// ```
pub fn looping_state<C, E>(state: impl Into<String>, action: impl Into<String>) -> StateDefinition<C, E> {
    StateDefinition::new().action(action, ActionDefinition::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn simple_state_builds_actions_in_order() {
        let state: StateDefinition<(), Infallible> =
            simple_state(vec![("a", "x"), ("b", "y"), ("c", "x")]);

        assert_eq!(state.action_names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(state.targets(), vec!["x", "y"]);
    }

    #[test]
    fn looping_state_targets_itself() {
        let state: StateDefinition<(), Infallible> = looping_state("idle", "poll");

        assert_eq!(state.get_action("poll").unwrap().target_state(), "idle");
    }

    #[test]
    fn machine_from_helpers() {
        let mut fsm = FsmBuilder::<(), Infallible>::new()
            .initial_state("start")
            .state("start", simple_state([("finish", "done")]))
            .state("done", looping_state("done", "ack"))
            .build()
            .unwrap();

        assert!(!fsm.is_final_state());
        fsm.do_action("finish").unwrap();
        assert!(fsm.is_final_state());
        assert_eq!(fsm.do_action("ack").unwrap(), "done");
    }
}
