//! # Dispatcher
//!
//! Admits customers one after another, spawns one [`OrderWorker`] task per order,
//! waits for all of them and reduces the day's results into a [`Summary`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};

use crate::clients::Kitchen;
use crate::config::PizzeriaConfig;
use crate::model::{OrderId, OrderOutcome, OrderPlan, OrderReport, OrderTally, Summary};
use crate::stats_actor::StatsError;
use crate::worker::OrderWorker;

/// Everything known at the end of a day.
#[derive(Debug, Clone)]
pub struct DayReport {
    pub summary: Summary,
    /// One report per admitted order, in id order.
    pub orders: Vec<OrderReport>,
}

/// Spawns the day's orders at randomized intervals.
pub struct Dispatcher {
    config: Arc<PizzeriaConfig>,
    kitchen: Kitchen,
    seed: u64,
    arrivals: ChaCha8Rng,
}

impl Dispatcher {
    pub fn new(config: Arc<PizzeriaConfig>, kitchen: Kitchen, seed: u64) -> Self {
        Self {
            config,
            kitchen,
            seed,
            arrivals: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Time units until the next customer shows up.
    pub fn next_interval(&mut self) -> u32 {
        self.arrivals.gen_range(self.config.order_interval.clone())
    }

    /// Admits `customers` orders, waits for every one to finish and summarizes.
    pub async fn run(mut self, customers: u64) -> Result<DayReport, StatsError> {
        info!(customers, seed = self.seed, "Now taking orders");

        let mut handles = Vec::new();
        for n in 1..=customers {
            let id = OrderId(n);
            let plan = OrderPlan::draw(self.seed, id, &self.config);
            let worker = OrderWorker::new(plan, self.kitchen.clone(), self.config.clone());
            let span = info_span!("order", %id);
            handles.push((id, tokio::spawn(worker.run().instrument(span))));
            info!(%id, "Submitted order");

            if n < customers {
                let interval = self.next_interval();
                sleep(self.config.units(interval)).await;
            }
        }

        let mut tally = OrderTally::default();
        let mut orders = Vec::with_capacity(handles.len());
        for (id, handle) in handles {
            let report = match handle.await {
                Ok(report) if report.id == id => report,
                Ok(report) => {
                    error!(%id, reported = %report.id, "Order reported under the wrong id");
                    OrderReport {
                        id,
                        outcome: OrderOutcome::Failed(format!("reported as {}", report.id)),
                    }
                }
                Err(e) => {
                    error!(%id, error = %e, "Order task failed");
                    OrderReport {
                        id,
                        outcome: OrderOutcome::Failed(e.to_string()),
                    }
                }
            };
            match &report.outcome {
                OrderOutcome::Delivered(_) => {
                    tally.delivered += 1;
                    info!(%id, "Closed out order");
                }
                OrderOutcome::Declined => tally.declined += 1,
                OrderOutcome::Failed(_) => tally.failed += 1,
            }
            orders.push(report);
        }

        let stats = self.kitchen.stats.snapshot().await?;
        let summary = Summary {
            stats,
            tally,
            time_unit: self.config.time_unit,
        };
        info!(
            income = stats.total_income,
            delivered = tally.delivered,
            failed = tally.unsuccessful(),
            "Done for the day"
        );
        Ok(DayReport { summary, orders })
    }
}
