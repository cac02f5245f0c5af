//! Actionfsm: a small declarative finite state machine
//!
//! A machine is described by a configuration: an initial state, a table of
//! states and the actions available from each, and optional callbacks. The
//! engine tracks the current state, validates and executes actions, answers
//! introspection queries, and runs enter/exit hooks at three scopes.
//!
//! # Core Concepts
//!
//! - **State**: a named position; exactly one is current at any time
//! - **Action**: a named, state-scoped route to a target state
//! - **Hook**: an optional callback run around a transition at global,
//!   state or action scope
//! - **Data**: the caller's own state, carried by the machine and shared with
//!   every callback
//!
//! # Example
//!
//! ```rust
//! use actionfsm::builder::FsmBuilder;
//! use actionfsm::core::{ActionDefinition, ActionEvent, StateDefinition};
//! use std::convert::Infallible;
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: u32,
//! }
//!
//! let mut fsm = FsmBuilder::<Counter, Infallible>::new()
//!     .initial_state("one")
//!     .state(
//!         "one",
//!         StateDefinition::new().action(
//!             "inc",
//!             ActionDefinition::new("two").body(|counter: &mut Counter, _: &ActionEvent<'_>| {
//!                 counter.value += 1;
//!                 Ok(())
//!             }),
//!         ),
//!     )
//!     .state("two", StateDefinition::new())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fsm.possible_actions(), vec!["inc"]);
//! assert!(!fsm.is_final_state());
//!
//! assert_eq!(fsm.do_action("inc").unwrap(), "two");
//! assert_eq!(fsm.value, 1);
//! assert!(fsm.is_final_state());
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod error;
pub mod schema;

// Re-export commonly used types
pub use builder::FsmBuilder;
pub use crate::core::{ActionDefinition, ActionEvent, Hook, MachineConfig, StateDefinition};
pub use engine::{create_fsm, Fsm};
pub use error::{Error, FsmError};
