//! Builder for constructing state machines.

use crate::core::{ActionEvent, MachineConfig, StateDefinition};
use crate::engine::Fsm;
use crate::error::Error;
use crate::schema::MachineSchema;
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
pub struct FsmBuilder<C, E> {
    config: MachineConfig<C, E>,
}

impl<C: Default, E> FsmBuilder<C, E> {
    /// Create a new builder with default data.
    pub fn new() -> Self {
        Self::with_data(C::default())
    }
}

impl<C, E> FsmBuilder<C, E> {
    /// Create a new builder carrying `data` as the machine's pass-through
    /// state.
    pub fn with_data(data: C) -> Self {
        Self {
            config: MachineConfig::new(data),
        }
    }

    /// Seed a builder from a declarative schema.
    pub fn from_schema(schema: MachineSchema, data: C) -> Self {
        Self {
            config: schema.into_config(data),
        }
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: impl Into<String>) -> Self {
        self.config.initial_state = Some(state.into());
        self
    }

    /// Add (or replace) a state definition.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition<C, E>) -> Self {
        self.config.states.insert(name.into(), definition);
        self
    }

    /// Add multiple states at once, e.g. the output of [`states!`](crate::states).
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (S, StateDefinition<C, E>)>,
        S: Into<String>,
    {
        self.config
            .states
            .extend(states.into_iter().map(|(name, state)| (name.into(), state)));
        self
    }

    /// Rework a state in place, starting from an empty definition if the
    /// state does not exist yet. Handy for attaching hooks to schema-loaded
    /// states.
    pub fn configure_state<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(StateDefinition<C, E>) -> StateDefinition<C, E>,
    {
        let name = name.into();
        let current = self.config.states.remove(&name).unwrap_or_default();
        self.config.states.insert(name, f(current));
        self
    }

    /// Set the one-shot initializer, run during [`build`](Self::build).
    pub fn initialize<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
    {
        self.config.initialize = Some(Box::new(f));
        self
    }

    /// Set the global enter hook.
    pub fn on_action_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.config.on_action_enter = Some(Arc::new(f));
        self
    }

    /// Set the global exit hook.
    pub fn on_action_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut C, &ActionEvent<'_>) -> Result<(), E> + Send + Sync + 'static,
    {
        self.config.on_action_exit = Some(Arc::new(f));
        self
    }

    /// Finish without constructing the machine.
    pub fn into_config(self) -> MachineConfig<C, E> {
        self.config
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the initializer
    /// fails.
    pub fn build(self) -> Result<Fsm<C, E>, Error<E>> {
        Fsm::new(self.config)
    }
}

impl<C: Default, E> Default for FsmBuilder<C, E> {
    fn default() -> Self {
        Self::new()
    }
}
