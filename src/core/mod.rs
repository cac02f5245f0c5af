//! Configuration data model for state machines.
//!
//! This module contains the declarative side of a machine:
//! - Action and state definitions
//! - Enter/exit hooks at global, state and action scope
//! - The `MachineConfig` handed to the engine
//!
//! Nothing here executes a transition; that is the engine's job.

mod action;
mod config;
mod hooks;
mod state;

pub use action::ActionDefinition;
pub use config::{Initializer, MachineConfig};
pub use hooks::{hook, ActionEvent, Hook, Hooks};
pub use state::StateDefinition;

pub(crate) use hooks::invoke;
