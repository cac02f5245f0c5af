//! State machine that executes actions and runs their hooks.

use crate::core::{invoke, ActionEvent, Hook, MachineConfig, StateDefinition};
use crate::error::{Error, FsmError};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// A running finite state machine.
///
/// Owns the current state and the caller's data `C`. The data is reachable
/// through [`data`](Self::data), [`data_mut`](Self::data_mut) and `Deref`, and
/// is passed to every hook and action body as the shared invocation context.
pub struct Fsm<C = (), E = Infallible> {
    current: String,
    states: HashMap<String, StateDefinition<C, E>>,
    on_action_enter: Option<Hook<C, E>>,
    on_action_exit: Option<Hook<C, E>>,
    data: C,
}

/// Construct a machine from an optional configuration.
///
/// `None` fails with [`FsmError::ConfigurationMissing`]; otherwise this is
/// [`Fsm::new`].
pub fn create_fsm<C, E>(config: Option<MachineConfig<C, E>>) -> Result<Fsm<C, E>, Error<E>> {
    let config = config.ok_or(FsmError::ConfigurationMissing)?;
    Fsm::new(config)
}

impl<C, E> Fsm<C, E> {
    /// Construct a machine in its initial state.
    ///
    /// Fails with [`FsmError::InitialStateMissing`] when no (or an empty)
    /// initial state is configured. The initializer, if any, runs exactly
    /// once before the machine is returned; its error is returned as
    /// [`Error::Callback`].
    pub fn new(config: MachineConfig<C, E>) -> Result<Self, Error<E>> {
        let MachineConfig {
            initial_state,
            states,
            initialize,
            on_action_enter,
            on_action_exit,
            data,
        } = config;

        let current = initial_state
            .filter(|state| !state.is_empty())
            .ok_or(FsmError::InitialStateMissing)?;

        if let Some(initialize) = initialize {
            initialize().map_err(Error::Callback)?;
        }

        debug!(
            initial_state = %current,
            states = states.len(),
            "Constructed state machine"
        );

        Ok(Self {
            current,
            states,
            on_action_enter,
            on_action_exit,
            data,
        })
    }

    /// Execute `action` from the current state and return the new state.
    ///
    /// The action and its target are validated before anything runs. Then,
    /// in order: global, state and action enter hooks, the action body, the
    /// commit to the target state, and global, state and action exit hooks.
    ///
    /// Callback errors are returned as [`Error::Callback`] without rollback:
    /// a failure before the commit leaves the current state untouched, a
    /// failure in an exit hook leaves the machine in the target state.
    pub fn do_action(&mut self, action: &str) -> Result<&str, Error<E>> {
        trace!(action = %action, state = %self.current, "Executing action");

        let Some(state) = self.states.get(&self.current) else {
            debug!(action = %action, state = %self.current, "Rejected action from undefined state");
            return Err(FsmError::UnknownAction {
                action: action.to_string(),
            }
            .into());
        };

        let Some(definition) = state.get_action(action) else {
            debug!(action = %action, state = %self.current, "Rejected unknown action");
            return Err(FsmError::UnknownAction {
                action: action.to_string(),
            }
            .into());
        };

        let target = definition.target_state();
        if !self.states.contains_key(target) {
            debug!(action = %action, target = %target, "Rejected action with undefined target");
            return Err(FsmError::UnknownTargetState {
                target: target.to_string(),
            }
            .into());
        }

        let from = self.current.clone();
        let event = ActionEvent {
            action,
            from: &from,
            to: target,
        };

        invoke(self.on_action_enter.as_ref(), &mut self.data, &event).map_err(Error::Callback)?;
        state
            .hooks
            .enter(&mut self.data, &event)
            .map_err(Error::Callback)?;
        definition
            .hooks
            .enter(&mut self.data, &event)
            .map_err(Error::Callback)?;
        invoke(definition.body.as_ref(), &mut self.data, &event).map_err(Error::Callback)?;

        self.current = target.to_string();
        debug!(action = %action, from = %from, to = %target, "Transition committed");

        invoke(self.on_action_exit.as_ref(), &mut self.data, &event).map_err(Error::Callback)?;
        state
            .hooks
            .exit(&mut self.data, &event)
            .map_err(Error::Callback)?;
        definition
            .hooks
            .exit(&mut self.data, &event)
            .map_err(Error::Callback)?;

        Ok(&self.current)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Actions available from the current state, in definition order.
    pub fn possible_actions(&self) -> Vec<&str> {
        self.current_definition()
            .map(|state| state.action_names().collect())
            .unwrap_or_default()
    }

    /// States one action away from the current state, without duplicates.
    pub fn reachable_states(&self) -> Vec<&str> {
        self.current_definition()
            .map(StateDefinition::targets)
            .unwrap_or_default()
    }

    pub fn is_action_valid(&self, action: &str) -> bool {
        self.current_definition()
            .is_some_and(|state| state.get_action(action).is_some())
    }

    pub fn is_action_invalid(&self, action: &str) -> bool {
        !self.is_action_valid(action)
    }

    pub fn is_reachable_state(&self, state: &str) -> bool {
        self.reachable_states().contains(&state)
    }

    pub fn is_unreachable_state(&self, state: &str) -> bool {
        !self.is_reachable_state(state)
    }

    /// True when every action from the current state loops back to it.
    /// A state with no actions is final.
    pub fn is_final_state(&self) -> bool {
        self.reachable_states()
            .iter()
            .all(|state| *state == self.current)
    }

    /// The caller's data.
    pub fn data(&self) -> &C {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut C {
        &mut self.data
    }

    /// Consume the machine, returning the caller's data.
    pub fn into_data(self) -> C {
        self.data
    }

    /// Definition of a configured state.
    pub fn state(&self, name: &str) -> Option<&StateDefinition<C, E>> {
        self.states.get(name)
    }

    // The initial state is taken as given and may have no definition.
    fn current_definition(&self) -> Option<&StateDefinition<C, E>> {
        self.states.get(&self.current)
    }
}

impl<C, E> Deref for Fsm<C, E> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.data
    }
}

impl<C, E> DerefMut for Fsm<C, E> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.data
    }
}

impl<C: fmt::Debug, E> fmt::Debug for Fsm<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<&String> = self.states.keys().collect();
        states.sort();
        f.debug_struct("Fsm")
            .field("current", &self.current)
            .field("states", &states)
            .field("data", &self.data)
            .finish()
    }
}
