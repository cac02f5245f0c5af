//! Error types for machine construction and action execution.

/// Validation failures raised by the engine itself.
///
/// These are fatal to the single operation that raised them and are never
/// retried internally.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FsmError {
    #[error("FSM: You must provide machine configuration")]
    ConfigurationMissing,

    #[error("FSM: You must provide an initial state")]
    InitialStateMissing,

    #[error("FSM: action {action} doesn't exist")]
    UnknownAction { action: String },

    #[error("FSM: target state {target} doesn't exist")]
    UnknownTargetState { target: String },
}

/// Error returned by fallible engine operations.
///
/// `E` is the caller's own callback error type. It is carried through
/// untouched so engine validation failures stay distinguishable from
/// failures raised inside hooks, action bodies or the initializer.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error(transparent)]
    Fsm(#[from] FsmError),

    #[error("{0}")]
    Callback(E),
}

impl<E> Error<E> {
    /// The engine validation failure, if this is one.
    pub fn as_fsm(&self) -> Option<&FsmError> {
        match self {
            Self::Fsm(err) => Some(err),
            Self::Callback(_) => None,
        }
    }

    /// Unwrap a callback failure back into the caller's error value.
    pub fn into_callback(self) -> Option<E> {
        match self {
            Self::Fsm(_) => None,
            Self::Callback(err) => Some(err),
        }
    }
}
