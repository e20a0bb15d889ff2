//! # Order Worker
//!
//! One task per order. The worker walks the order through payment, preparation,
//! baking, packing and delivery, taking and giving back pool units on the way.
//!
//! ## Unit holding
//!
//! | Stage            | Holds                         |
//! |------------------|-------------------------------|
//! | Preparing        | 1 cook                        |
//! | AwaitingOven     | 1 cook (until the oven grant) |
//! | Baking           | `n` oven slots                |
//! | Packing          | `n` oven slots, 1 packer      |
//! | Delivering       | 1 driver (there and back)     |
//!
//! The cook is only freed once the pizzas are safely in the oven. Cook and oven are
//! the only pair ever held together, and always taken in that order.
//!
//! The worker keeps a ledger of the units it holds. An order that fails part way
//! hands every one of them back before it reports [`OrderOutcome::Failed`].

use std::fmt::Display;
use std::sync::Arc;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use super::error::OrderError;
use crate::clients::Kitchen;
use crate::config::PizzeriaConfig;
use crate::model::{DeliveryReport, OrderOutcome, OrderPlan, OrderReport, PoolKind};

/// Where an order currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Submitted,
    PaymentProcessing,
    Paid,
    AwaitingCook,
    Preparing,
    AwaitingOven,
    Baking,
    AwaitingPacker,
    Packing,
    AwaitingDriver,
    Delivering,
    Delivered,
    Declined,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Drives a single order from submission to a terminal state.
pub struct OrderWorker {
    plan: OrderPlan,
    kitchen: Kitchen,
    config: Arc<PizzeriaConfig>,
    stage: Stage,
    submitted_at: Instant,
    held: Vec<(PoolKind, u32)>,
}

impl OrderWorker {
    /// Creates the worker. The submission clock starts now.
    pub fn new(plan: OrderPlan, kitchen: Kitchen, config: Arc<PizzeriaConfig>) -> Self {
        Self {
            plan,
            kitchen,
            config,
            stage: Stage::Submitted,
            submitted_at: Instant::now(),
            held: Vec::new(),
        }
    }

    /// Runs the order to completion. Never fails: infrastructure errors become
    /// [`OrderOutcome::Failed`], after the units still held are returned.
    pub async fn run(mut self) -> OrderReport {
        let id = self.plan.id;
        let outcome = match self.process().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(%id, stage = %self.stage, error = %e, "Order aborted");
                self.release_held().await;
                OrderOutcome::Failed(e.to_string())
            }
        };
        OrderReport { id, outcome }
    }

    async fn take(&mut self, kind: PoolKind, units: u32) -> Result<(), OrderError> {
        self.kitchen.pool(kind).acquire(self.plan.id, units).await?;
        self.held.push((kind, units));
        Ok(())
    }

    async fn give_back(&mut self, kind: PoolKind, units: u32) -> Result<(), OrderError> {
        if let Some(pos) = self.held.iter().position(|held| *held == (kind, units)) {
            self.held.remove(pos);
        }
        self.kitchen.pool(kind).release(self.plan.id, units).await?;
        Ok(())
    }

    /// Returns whatever the order still holds, newest first.
    async fn release_held(&mut self) {
        while let Some((kind, units)) = self.held.pop() {
            match self.kitchen.pool(kind).release(self.plan.id, units).await {
                Ok(()) => debug!(pool = %kind, units, "Returned units of failed order"),
                Err(e) => warn!(pool = %kind, units, error = %e, "Units of failed order lost"),
            }
        }
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = %self.stage, to = %next, "Stage");
        self.stage = next;
    }

    async fn pause(&self, units: u32) {
        sleep(self.config.units(units)).await;
    }

    fn in_units(&self, elapsed: std::time::Duration) -> f64 {
        self.config.in_units(elapsed)
    }

    async fn process(&mut self) -> Result<OrderOutcome, OrderError> {
        let id = self.plan.id;
        let pizzas = self.plan.pizza_count();

        // Payment
        self.advance(Stage::PaymentProcessing);
        info!("Processing payment");
        self.pause(self.plan.payment_time).await;
        if self.plan.declined {
            self.advance(Stage::Declined);
            warn!("Card declined, scrapping order");
            return Ok(OrderOutcome::Declined);
        }

        self.advance(Stage::Paid);
        let price = self
            .plan
            .price(self.config.price_plain, self.config.price_special);
        self.kitchen
            .stats
            .record_sale(id, self.plan.plain_count(), self.plan.special_count(), price)
            .await?;
        info!(price, pizzas, "Payment accepted");

        // Preparation
        self.advance(Stage::AwaitingCook);
        self.take(PoolKind::Preparation, 1).await?;
        self.advance(Stage::Preparing);
        info!("Order now being prepared");
        self.pause(self.config.prep_time * pizzas).await;

        // Baking
        self.advance(Stage::AwaitingOven);
        self.take(PoolKind::Oven, pizzas).await?;
        self.give_back(PoolKind::Preparation, 1).await?;
        self.advance(Stage::Baking);
        info!("Order is in the oven");
        self.pause(self.config.bake_time).await;
        let baked_at = Instant::now();

        // Packing
        self.advance(Stage::AwaitingPacker);
        self.take(PoolKind::Packing, 1).await?;
        self.advance(Stage::Packing);
        info!("Order is being packed");
        self.pause(self.config.pack_time * pizzas).await;
        let ready_time = self.submitted_at.elapsed();
        info!(ready_in = self.in_units(ready_time), "Order ready for delivery");
        self.give_back(PoolKind::Oven, pizzas).await?;
        self.give_back(PoolKind::Packing, 1).await?;

        // Delivery
        self.advance(Stage::AwaitingDriver);
        self.take(PoolKind::Delivery, 1).await?;
        self.advance(Stage::Delivering);
        self.pause(self.plan.delivery_time).await;
        let order_time = self.submitted_at.elapsed();
        let cooling_time = baked_at.elapsed();
        info!(
            delivered_in = self.in_units(order_time),
            cooled_for = self.in_units(cooling_time),
            "Order delivered! Enjoy your pizza"
        );
        self.kitchen
            .stats
            .record_delivery(id, order_time, cooling_time)
            .await?;

        // The driver still has to come back.
        self.pause(self.plan.delivery_time).await;
        self.give_back(PoolKind::Delivery, 1).await?;
        self.advance(Stage::Delivered);

        Ok(OrderOutcome::Delivered(DeliveryReport {
            ready_time,
            order_time,
            cooling_time,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Pizzeria;
    use crate::model::{OrderId, Pizza, StatsSnapshot};
    use crate::{pool_actor, stats_actor};
    use std::time::Duration;

    fn plan(pizzas: Vec<Pizza>, declined: bool) -> OrderPlan {
        OrderPlan {
            id: OrderId(1),
            pizzas,
            payment_time: 1,
            declined,
            delivery_time: 5,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivered_order_timings_and_pools() {
        let pizzeria = Pizzeria::new(PizzeriaConfig::default()).unwrap();
        let worker = OrderWorker::new(
            plan(vec![Pizza::Plain, Pizza::Special], false),
            pizzeria.kitchen().clone(),
            pizzeria.config().clone(),
        );

        let report = worker.run().await;
        let delivery = match report.outcome {
            OrderOutcome::Delivered(delivery) => delivery,
            other => panic!("expected delivery, got {:?}", other),
        };
        // payment 1 + prep 2 + bake 10 + pack 2
        assert_eq!(delivery.ready_time.as_secs(), 15);
        // + delivery 5
        assert_eq!(delivery.order_time.as_secs(), 20);
        // pack 2 + delivery 5
        assert_eq!(delivery.cooling_time.as_secs(), 7);

        let stats = pizzeria.kitchen().stats.snapshot().await.unwrap();
        assert_eq!(stats.total_income, 22);
        assert_eq!((stats.plain_count, stats.special_count), (1, 1));
        assert_eq!(stats.deliveries, 1);
        assert_eq!(stats.max_cooling_time.as_secs(), 7);

        for status in pizzeria.kitchen().pool_statuses().await.unwrap() {
            assert!(status.is_full(), "{:?}", status);
        }
        pizzeria.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_order_touches_nothing() {
        let pizzeria = Pizzeria::new(PizzeriaConfig::default()).unwrap();
        let worker = OrderWorker::new(
            plan(vec![Pizza::Special; 3], true),
            pizzeria.kitchen().clone(),
            pizzeria.config().clone(),
        );

        let report = worker.run().await;
        assert_eq!(report.outcome, OrderOutcome::Declined);
        assert_eq!(
            pizzeria.kitchen().stats.snapshot().await.unwrap(),
            StatsSnapshot::default()
        );
        pizzeria.shutdown().await.unwrap();
    }

    /// Spawns a kitchen sized from `config`, leaving out the pools in `stopped`.
    fn kitchen_without(config: &PizzeriaConfig, stopped: &[PoolKind]) -> Kitchen {
        let mut clients = Vec::new();
        for kind in PoolKind::ALL {
            let (actor, client) = pool_actor::new(kind, config.pool_size(kind), 8);
            if !stopped.contains(&kind) {
                tokio::spawn(actor.run(()));
            }
            clients.push(client);
        }
        let (stats_actor, stats) = stats_actor::new(8);
        tokio::spawn(stats_actor.run(()));
        Kitchen {
            prep: clients[0].clone(),
            oven: clients[1].clone(),
            packing: clients[2].clone(),
            delivery: clients[3].clone(),
            stats,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_lost_pool_fails_the_order() {
        let config = Arc::new(PizzeriaConfig::default());
        let kitchen = kitchen_without(&config, &[PoolKind::Oven]);

        let report = OrderWorker::new(plan(vec![Pizza::Plain], false), kitchen.clone(), config)
            .run()
            .await;
        assert!(matches!(report.outcome, OrderOutcome::Failed(_)));
        // The sale was booked before the kitchen broke down.
        assert_eq!(kitchen.stats.snapshot().await.unwrap().paid_orders, 1);
        // The cook was handed back on the way out.
        assert!(kitchen.prep.status().await.unwrap().is_full());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_order_returns_its_cook() {
        // Skips validation: the oven is smaller than the largest order.
        let config = Arc::new(PizzeriaConfig {
            cooks: 1,
            ovens: 3,
            ..Default::default()
        });
        let kitchen = kitchen_without(&config, &[]);

        let oversized = OrderWorker::new(
            plan(vec![Pizza::Plain; 5], false),
            kitchen.clone(),
            config.clone(),
        )
        .run()
        .await;
        assert!(matches!(oversized.outcome, OrderOutcome::Failed(_)));
        for status in kitchen.pool_statuses().await.unwrap() {
            assert!(status.is_full(), "{:?}", status);
        }

        let mut next = plan(vec![Pizza::Special], false);
        next.id = OrderId(2);
        let report = tokio::time::timeout(
            Duration::from_secs(3600),
            OrderWorker::new(next, kitchen.clone(), config).run(),
        )
        .await
        .expect("next order should not wait on a lost cook");
        assert!(report.outcome.is_delivered());
        assert!(kitchen.prep.status().await.unwrap().is_full());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cook_is_held_until_the_oven_is_granted() {
        let config = Arc::new(PizzeriaConfig::default());
        let kitchen = kitchen_without(&config, &[]);
        kitchen.oven.acquire(OrderId(99), config.ovens).await.unwrap();

        let waiting = tokio::spawn(
            OrderWorker::new(plan(vec![Pizza::Plain; 2], false), kitchen.clone(), config.clone())
                .run(),
        );
        // Payment 1 + prep 2, then parked on the full oven.
        tokio::time::sleep(Duration::from_secs(60)).await;
        let oven = kitchen.oven.status().await.unwrap();
        assert_eq!(oven.waiting, 1);
        let prep = kitchen.prep.status().await.unwrap();
        assert_eq!(prep.capacity, config.cooks - 1);

        kitchen.oven.release(OrderId(99), config.ovens).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(kitchen.oven.status().await.unwrap().capacity, config.ovens - 2);
        assert!(kitchen.prep.status().await.unwrap().is_full());

        let report = waiting.await.unwrap();
        assert!(report.outcome.is_delivered());
    }
}
