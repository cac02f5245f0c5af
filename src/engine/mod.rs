//! The transition engine.
//!
//! [`Fsm`] owns the current state and executes actions against it. Every
//! transition is validated before any callback runs, then hooks fire in a
//! fixed order around the action body:
//!
//! 1. global `on_action_enter`
//! 2. state `on_action_enter`
//! 3. action `on_action_enter`
//! 4. action body
//! 5. commit to the target state
//! 6. global `on_action_exit`
//! 7. state `on_action_exit`
//! 8. action `on_action_exit`
//!
//! Execution is synchronous. Callbacks that produce deferred work are
//! responsible for driving it themselves; the engine never waits on it.

mod machine;

pub use machine::{create_fsm, Fsm};
