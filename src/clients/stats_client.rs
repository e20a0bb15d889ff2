use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, StatsSnapshot};
use crate::stats_actor::{StatsAggregator, StatsError, StatsRequest};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with the stats actor.
#[derive(Clone)]
pub struct StatsClient {
    inner: ResourceClient<StatsAggregator>,
}

impl StatsClient {
    pub fn new(inner: ResourceClient<StatsAggregator>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn record_sale(
        &self,
        order: OrderId,
        plain: u32,
        special: u32,
        revenue: u64,
    ) -> Result<(), StatsError> {
        debug!("Sending request");
        self.call(move |respond_to| StatsRequest::RecordSale {
            order,
            plain,
            special,
            revenue,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn record_delivery(
        &self,
        order: OrderId,
        order_time: Duration,
        cooling_time: Duration,
    ) -> Result<(), StatsError> {
        debug!("Sending request");
        self.call(move |respond_to| StatsRequest::RecordDelivery {
            order,
            order_time,
            cooling_time,
            respond_to,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<StatsSnapshot, StatsError> {
        self.call(|respond_to| StatsRequest::Snapshot { respond_to }).await
    }
}

#[async_trait]
impl ActorClient<StatsAggregator> for StatsClient {
    type Error = StatsError;

    fn inner(&self) -> &ResourceClient<StatsAggregator> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        downcast_entity_error(e)
    }
}
