//! The declarative machine configuration consumed by the engine.

use super::hooks::Hook;
use super::state::StateDefinition;
use crate::error::FsmError;
use std::collections::HashMap;
use std::fmt;

/// One-shot callback run when the machine is constructed.
pub type Initializer<E> = Box<dyn FnOnce() -> Result<(), E> + Send>;

/// Everything needed to construct an [`Fsm`](crate::engine::Fsm).
///
/// `data` is the caller's own state. The engine never interprets it; it is
/// exposed on the constructed machine and handed to every callback as the
/// shared invocation context.
pub struct MachineConfig<C, E> {
    pub initial_state: Option<String>,
    pub states: HashMap<String, StateDefinition<C, E>>,
    pub initialize: Option<Initializer<E>>,
    pub on_action_enter: Option<Hook<C, E>>,
    pub on_action_exit: Option<Hook<C, E>>,
    pub data: C,
}

impl<C, E> MachineConfig<C, E> {
    /// An empty configuration carrying `data`. No initial state is set.
    pub fn new(data: C) -> Self {
        Self {
            initial_state: None,
            states: HashMap::new(),
            initialize: None,
            on_action_enter: None,
            on_action_exit: None,
            data,
        }
    }

    /// Check every action's target against the defined states.
    ///
    /// Unlike [`Fsm::do_action`](crate::engine::Fsm::do_action), which only
    /// checks the action being executed, this walks the whole table and
    /// reports all dangling targets at once.
    pub fn validate(&self) -> Result<(), Vec<FsmError>> {
        let mut state_names: Vec<&String> = self.states.keys().collect();
        state_names.sort();

        let violations: Vec<FsmError> = state_names
            .into_iter()
            .filter_map(|name| self.states.get(name))
            .flat_map(|state| state.actions.iter())
            .map(|(_, action)| action.target_state())
            .filter(|target| !self.states.contains_key(*target))
            .map(|target| FsmError::UnknownTargetState {
                target: target.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<C: Default, E> Default for MachineConfig<C, E> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: fmt::Debug, E> fmt::Debug for MachineConfig<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineConfig")
            .field("initial_state", &self.initial_state)
            .field("states", &self.states)
            .field("initialize", &self.initialize.is_some())
            .field("on_action_enter", &self.on_action_enter.is_some())
            .field("on_action_exit", &self.on_action_exit.is_some())
            .field("data", &self.data)
            .finish()
    }
}
