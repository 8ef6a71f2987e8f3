//! Engine error type.
//!
//! Errors exist only at construction time.  Inside a tick, an unresolved
//! target gate, a missing redirect alternative, or an acknowledge of an
//! unknown alert is a silent no-op.

use crowd_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("at least one gate must be configured")]
    NoGates,

    #[error(transparent)]
    Params(#[from] CoreError),

    #[error("zone {name:?} has invalid bounds (min must be <= max and finite)")]
    InvalidZoneBounds { name: String },

    #[error("gate {name:?} has a non-finite position")]
    InvalidGatePosition { name: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
