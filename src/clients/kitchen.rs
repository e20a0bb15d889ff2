use crate::clients::{PoolClient, StatsClient};
use crate::model::{PoolKind, PoolStatus};
use crate::pool_actor::PoolError;

/// Every client an order needs on its way through the kitchen.
///
/// Cloning is cheap; each order task owns its own copy.
#[derive(Clone)]
pub struct Kitchen {
    pub prep: PoolClient,
    pub oven: PoolClient,
    pub packing: PoolClient,
    pub delivery: PoolClient,
    pub stats: StatsClient,
}

impl Kitchen {
    /// The client for the given pool.
    pub fn pool(&self, kind: PoolKind) -> &PoolClient {
        match kind {
            PoolKind::Preparation => &self.prep,
            PoolKind::Oven => &self.oven,
            PoolKind::Packing => &self.packing,
            PoolKind::Delivery => &self.delivery,
        }
    }

    /// The pools in stage order.
    pub fn pools(&self) -> [&PoolClient; 4] {
        [&self.prep, &self.oven, &self.packing, &self.delivery]
    }

    /// Current status of every pool, in stage order.
    pub async fn pool_statuses(&self) -> Result<Vec<PoolStatus>, PoolError> {
        let mut statuses = Vec::with_capacity(4);
        for pool in self.pools() {
            statuses.push(pool.status().await?);
        }
        Ok(statuses)
    }
}
