//! Error types for the stats actor.

use thiserror::Error;

/// Errors that can occur while recording statistics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StatsError {
    fn from(msg: String) -> Self {
        StatsError::ActorCommunicationError(msg)
    }
}
