//! Order processing: the per-order state machine and its random draws.
//!
//! - [`order_worker`] - [`OrderWorker`] and its [`Stage`]s
//! - [`plan`] - [`OrderPlan::draw`](crate::model::OrderPlan::draw) and [`order_rng`]
//! - [`error`] - [`OrderError`]

pub mod error;
pub mod order_worker;
pub mod plan;

pub use error::*;
pub use order_worker::*;
pub use plan::*;
