//! [`ActorEntity`] implementation for the day's running statistics.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::actions::StatsRequest;
use crate::framework::ActorEntity;
use crate::model::StatsSnapshot;

/// Accumulates income, pizza counts and delivery timings for one run.
///
/// Totals only grow and maxima only move up, so the result is the same whatever
/// order the updates arrive in.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    stats: StatsSnapshot,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats
    }

    pub fn record_sale(&mut self, plain: u32, special: u32, revenue: u64) {
        self.stats.plain_count += plain as u64;
        self.stats.special_count += special as u64;
        self.stats.total_income += revenue;
        self.stats.paid_orders += 1;
    }

    pub fn record_delivery(&mut self, order_time: Duration, cooling_time: Duration) {
        let stats = &mut self.stats;
        stats.deliveries += 1;
        stats.total_delivery_time += order_time;
        stats.total_cooling_time += cooling_time;
        if order_time > stats.max_delivery_time {
            stats.max_delivery_time = order_time;
        }
        if cooling_time > stats.max_cooling_time {
            stats.max_cooling_time = cooling_time;
        }
    }
}

#[async_trait]
impl ActorEntity for StatsAggregator {
    type Request = StatsRequest;
    type Context = ();

    fn label(&self) -> String {
        "stats".to_string()
    }

    async fn handle(&mut self, request: StatsRequest, _ctx: &()) {
        match request {
            StatsRequest::RecordSale {
                order,
                plain,
                special,
                revenue,
                respond_to,
            } => {
                self.record_sale(plain, special, revenue);
                debug!(%order, revenue, income = self.stats.total_income, "Sale recorded");
                let _ = respond_to.send(Ok(()));
            }
            StatsRequest::RecordDelivery {
                order,
                order_time,
                cooling_time,
                respond_to,
            } => {
                self.record_delivery(order_time, cooling_time);
                debug!(%order, ?order_time, ?cooling_time, "Delivery recorded");
                let _ = respond_to.send(Ok(()));
            }
            StatsRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.stats));
            }
        }
    }

    async fn on_stop(&mut self, _ctx: &()) {
        info!(
            income = self.stats.total_income,
            paid = self.stats.paid_orders,
            delivered = self.stats.deliveries,
            "Final state"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_sales_accumulate() {
        let mut stats = StatsAggregator::new();
        stats.record_sale(2, 1, 32);
        stats.record_sale(0, 3, 36);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.plain_count, 2);
        assert_eq!(snapshot.special_count, 4);
        assert_eq!(snapshot.total_income, 68);
        assert_eq!(snapshot.paid_orders, 2);
        assert_eq!(snapshot.deliveries, 0);
    }

    #[test]
    fn test_maxima_only_move_on_strictly_greater() {
        let mut stats = StatsAggregator::new();
        stats.record_delivery(secs(30), secs(12));
        stats.record_delivery(secs(25), secs(12));
        stats.record_delivery(secs(40), secs(8));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.deliveries, 3);
        assert_eq!(snapshot.total_delivery_time, secs(95));
        assert_eq!(snapshot.max_delivery_time, secs(40));
        assert_eq!(snapshot.total_cooling_time, secs(32));
        assert_eq!(snapshot.max_cooling_time, secs(12));
    }

    #[test]
    fn test_update_order_does_not_change_totals() {
        let deliveries = [(secs(31), secs(9)), (secs(17), secs(14)), (secs(44), secs(6))];
        let sales = [(1, 2, 34), (3, 0, 30), (2, 2, 44)];

        let mut forward = StatsAggregator::new();
        for ((plain, special, revenue), (order_time, cooling_time)) in sales.iter().zip(deliveries.iter()) {
            forward.record_sale(*plain, *special, *revenue);
            forward.record_delivery(*order_time, *cooling_time);
        }

        let mut backward = StatsAggregator::new();
        for (order_time, cooling_time) in deliveries.iter().rev() {
            backward.record_delivery(*order_time, *cooling_time);
        }
        for (plain, special, revenue) in sales.iter().rev() {
            backward.record_sale(*plain, *special, *revenue);
        }

        assert_eq!(forward.snapshot(), backward.snapshot());
    }
}
