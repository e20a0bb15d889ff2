//! # Pizzeria Simulator
//!
//! > **A concurrent order-fulfillment pipeline built from resource-pool actors.**
//!
//! Every customer order is an independent Tokio task that must take and give back
//! units from four finite pools (cooks, ovens, packers, drivers) in a fixed order,
//! with randomized service times and a chance of a declined payment.
//!
//! ## Architecture Notes
//!
//! ### 1. Shared state lives in actors
//! Each [`ResourcePool`](pool_actor::ResourcePool) and the
//! [`StatsAggregator`](stats_actor::StatsAggregator) is owned by its own
//! [`ResourceActor`](framework::ResourceActor). Requests are processed one at a time,
//! so the pool counter and the running totals need no locks.
//!
//! ### 2. Waiting is a parked reply
//! An acquire that does not fit is parked inside the pool actor. Every release
//! rechecks all parked acquires and answers each one that now fits. The order task
//! simply awaits its reply.
//!
//! ### 3. Reproducible randomness
//! Every order draws from its own generator seeded by `run seed + order id`
//! ([`worker::order_rng`]), so an order's pizzas, payment and delivery time never depend
//! on scheduling.
//!
//! ### 4. Explicit outcomes
//! An order ends as [`OrderOutcome`](model::OrderOutcome) `Delivered`, `Declined` or
//! `Failed`. Infrastructure failures never reach other orders.
//!
//! ## Module Tour
//!
//! - [`framework`] - the generic actor runtime
//! - [`pool_actor`], [`stats_actor`] - the concrete actors
//! - [`clients`] - typed handles, bundled per order as a [`Kitchen`](clients::Kitchen)
//! - [`worker`] - the per-order state machine
//! - [`lifecycle`] - the [`Pizzeria`](lifecycle::Pizzeria) orchestrator and the [`Dispatcher`](lifecycle::Dispatcher)
//! - [`model`], [`config`] - plain data
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- 10 42
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pool_actor;
pub mod stats_actor;
pub mod worker;
