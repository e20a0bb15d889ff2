use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;

/// Running totals kept by the stats actor.
///
/// Every field only ever grows during a run, so the final snapshot does not depend
/// on the order in which orders finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_income: u64,
    pub plain_count: u64,
    pub special_count: u64,
    pub paid_orders: u64,
    pub deliveries: u64,
    pub total_delivery_time: Duration,
    pub max_delivery_time: Duration,
    pub total_cooling_time: Duration,
    pub max_cooling_time: Duration,
}

impl StatsSnapshot {
    /// Mean submission-to-delivery time, `None` when nothing was delivered.
    pub fn average_delivery_time(&self) -> Option<Duration> {
        average(self.total_delivery_time, self.deliveries)
    }

    /// Mean bake-to-delivery time, `None` when nothing was delivered.
    pub fn average_cooling_time(&self) -> Option<Duration> {
        average(self.total_cooling_time, self.deliveries)
    }
}

fn average(total: Duration, count: u64) -> Option<Duration> {
    if count == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(total.as_secs_f64() / count as f64))
}

/// How the day's orders ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTally {
    pub delivered: u64,
    pub declined: u64,
    /// Orders aborted by an infrastructure failure (or a panicked task).
    pub failed: u64,
}

impl OrderTally {
    /// Declined and internally failed orders together, as the closing report counts them.
    pub fn unsuccessful(&self) -> u64 {
        self.declined + self.failed
    }

    pub fn total(&self) -> u64 {
        self.delivered + self.unsuccessful()
    }
}

/// The end-of-day report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub stats: StatsSnapshot,
    pub tally: OrderTally,
    /// Wall-clock length of one simulated time unit, used to express times in units.
    pub time_unit: Duration,
}

impl Summary {
    /// Converts a measured duration into simulated time units.
    pub fn in_units(&self, duration: Duration) -> f64 {
        if self.time_unit.is_zero() {
            return 0.0;
        }
        duration.as_secs_f64() / self.time_unit.as_secs_f64()
    }

    fn units_or_zero(&self, duration: Option<Duration>) -> f64 {
        duration.map(|d| self.in_units(d)).unwrap_or(0.0)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = &self.stats;
        writeln!(f, "Total income: ${}", stats.total_income)?;
        writeln!(f, "Plain pizzas sold: {}", stats.plain_count)?;
        writeln!(f, "Special pizzas sold: {}", stats.special_count)?;
        writeln!(f, "Successful orders: {}", self.tally.delivered)?;
        writeln!(
            f,
            "Failed orders: {} (declined {}, internal {})",
            self.tally.unsuccessful(),
            self.tally.declined,
            self.tally.failed
        )?;
        writeln!(
            f,
            "Average delivery time: {:.2}",
            self.units_or_zero(stats.average_delivery_time())
        )?;
        writeln!(
            f,
            "Maximum delivery time: {:.2}",
            self.in_units(stats.max_delivery_time)
        )?;
        writeln!(
            f,
            "Average cooling time: {:.2}",
            self.units_or_zero(stats.average_cooling_time())
        )?;
        write!(
            f,
            "Maximum cooling time: {:.2}",
            self.in_units(stats.max_cooling_time)
        )
    }
}
