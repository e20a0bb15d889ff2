//! Requests understood by the [`StatsAggregator`](super::entity::StatsAggregator) actor.

use crate::framework::Response;
use crate::model::{OrderId, StatsSnapshot};
use std::time::Duration;

#[derive(Debug)]
pub enum StatsRequest {
    /// A paid order: count its pizzas and book its revenue.
    RecordSale {
        order: OrderId,
        plain: u32,
        special: u32,
        revenue: u64,
        respond_to: Response<()>,
    },
    /// A delivered order: fold its timings into totals and maxima.
    RecordDelivery {
        order: OrderId,
        order_time: Duration,
        cooling_time: Duration,
        respond_to: Response<()>,
    },
    Snapshot { respond_to: Response<StatsSnapshot> },
}
