//! # Lifecycle & Orchestration
//!
//! Starting the kitchen's actors, running a day of orders, and shutting everything down.
//!
//! - [`Pizzeria`] - spawns the pool and stats actors and owns their handles
//! - [`Dispatcher`] - admits customers and waits for their orders
//! - [`setup_tracing`] - initializes logging for the binary
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of every actor channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Log their final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! The dispatcher only returns once every order task has terminated, so no order ever
//! holds a client when the kitchen closes.

pub mod dispatcher;
pub mod pizzeria;
pub mod tracing;

pub use dispatcher::*;
pub use pizzeria::*;
pub use self::tracing::*;
