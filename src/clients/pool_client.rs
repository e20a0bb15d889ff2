//! # Pool Client
//!
//! High-level API for the resource pool actors. Order workers only ever see this type.

use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, PoolKind, PoolStatus};
use crate::pool_actor::{PoolError, PoolRequest, ResourcePool};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for one resource pool.
#[derive(Clone)]
pub struct PoolClient {
    kind: PoolKind,
    inner: ResourceClient<ResourcePool>,
}

impl PoolClient {
    pub fn new(kind: PoolKind, inner: ResourceClient<ResourcePool>) -> Self {
        Self { kind, inner }
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    /// Takes `units` from the pool, waiting for as long as it takes.
    #[instrument(skip(self), fields(pool = %self.kind))]
    pub async fn acquire(&self, order: OrderId, units: u32) -> Result<(), PoolError> {
        debug!("Sending request");
        self.call(move |respond_to| PoolRequest::Acquire {
            order,
            units,
            respond_to,
        })
        .await
    }

    /// Returns `units` to the pool.
    #[instrument(skip(self), fields(pool = %self.kind))]
    pub async fn release(&self, order: OrderId, units: u32) -> Result<(), PoolError> {
        debug!("Sending request");
        self.call(move |respond_to| PoolRequest::Release {
            order,
            units,
            respond_to,
        })
        .await
    }

    pub async fn status(&self) -> Result<PoolStatus, PoolError> {
        self.call(|respond_to| PoolRequest::Status { respond_to }).await
    }
}

#[async_trait]
impl ActorClient<ResourcePool> for PoolClient {
    type Error = PoolError;

    fn inner(&self) -> &ResourceClient<ResourcePool> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_entity_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool_actor;

    #[tokio::test]
    async fn test_stopped_pool_reports_communication_error() {
        let (actor, pool) = pool_actor::new(PoolKind::Delivery, 10, 4);
        drop(actor);

        let err = pool.acquire(OrderId(7), 1).await.unwrap_err();
        assert_eq!(
            err,
            PoolError::ActorCommunicationError("Actor closed".to_string())
        );
    }
}
