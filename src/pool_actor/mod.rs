//! # Resource Pool Actor
//!
//! A counting pool of identical units (cooks, oven slots, packers, drivers).
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourcePool`], the [`ActorEntity`](crate::framework::ActorEntity) implementation
//! - [`error`] - [`PoolError`] type for type-safe error handling
//! - [`actions`] - [`PoolRequest`], the messages the pool understands
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Acquire / release discipline
//!
//! An acquire either takes all requested units at once or none. When it cannot be
//! served, the reply is parked. Every release rechecks every parked acquire, in
//! arrival order, and grants each one that now fits. A large request can therefore be
//! overtaken by smaller ones that arrived later; there is no FIFO guarantee.
//!
//! ```rust
//! use pizzeria_sim::model::{OrderId, PoolKind};
//! use pizzeria_sim::pool_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = pool_actor::new(PoolKind::Oven, 15, 32);
//!     tokio::spawn(actor.run(()));
//!
//!     client.acquire(OrderId(1), 5).await?;
//!     assert_eq!(client.status().await?.capacity, 10);
//!     client.release(OrderId(1), 5).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::PoolClient;
use crate::framework::ResourceActor;
use crate::model::PoolKind;

/// Creates a new pool actor with `total` units, and its client.
pub fn new(kind: PoolKind, total: u32, buffer_size: usize) -> (ResourceActor<ResourcePool>, PoolClient) {
    let (actor, generic_client) = ResourceActor::new(ResourcePool::new(kind, total), buffer_size);
    (actor, PoolClient::new(kind, generic_client))
}
