//! Requests understood by the [`ResourcePool`](super::entity::ResourcePool) actor.

use crate::framework::Response;
use crate::model::{OrderId, PoolStatus};

/// Messages sent to a pool actor.
///
/// `Acquire` is the only request whose reply may be delayed: the pool parks it until
/// enough units are free.
#[derive(Debug)]
pub enum PoolRequest {
    /// Take `units` from the pool, waiting until they are all available.
    Acquire {
        order: OrderId,
        units: u32,
        respond_to: Response<()>,
    },
    /// Give `units` back to the pool and let parked orders recheck.
    Release {
        order: OrderId,
        units: u32,
        respond_to: Response<()>,
    },
    /// Report free, total and waiting counts.
    Status { respond_to: Response<PoolStatus> },
}
