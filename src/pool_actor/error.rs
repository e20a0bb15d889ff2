//! Error types for the resource pool actors.

use crate::model::PoolKind;
use thiserror::Error;

/// Errors that can occur while acquiring or releasing pool units.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PoolError {
    /// A request for zero units.
    #[error("Pool {kind}: requested zero units")]
    ZeroUnits { kind: PoolKind },

    /// A request that could never be satisfied, even with every unit free.
    #[error("Pool {kind}: requested {requested} units but only {total} exist")]
    ExceedsTotal {
        kind: PoolKind,
        requested: u32,
        total: u32,
    },

    /// A release that would leave more units free than the pool owns.
    #[error("Pool {kind}: releasing {released} units with {capacity}/{total} free")]
    Overflow {
        kind: PoolKind,
        released: u32,
        capacity: u32,
        total: u32,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PoolError {
    fn from(msg: String) -> Self {
        PoolError::ActorCommunicationError(msg)
    }
}
