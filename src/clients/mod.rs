//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod kitchen;
pub mod pool_client;
pub mod stats_client;

pub use actor_client::*;
pub use kitchen::*;
pub use pool_client::*;
pub use stats_client::*;
