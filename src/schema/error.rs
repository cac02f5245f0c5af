//! Schema error types.

use crate::error::FsmError;
use thiserror::Error;

/// Errors that can occur while loading or rendering a machine schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document parsed but does not describe a machine
    #[error(transparent)]
    Fsm(#[from] FsmError),

    /// The document is not valid JSON or does not match the schema shape
    #[error("FSM: invalid machine schema: {0}")]
    Parse(#[from] serde_json::Error),
}
