//! Error types for order processing.

use crate::pool_actor::PoolError;
use crate::stats_actor::StatsError;
use thiserror::Error;

/// Infrastructure failures that abort an order.
///
/// A declined payment is not an error; it is a normal
/// [`OrderOutcome::Declined`](crate::model::OrderOutcome::Declined).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
