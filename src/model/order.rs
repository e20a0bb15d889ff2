//! One customer's order as it moves through the kitchen.
//!
//! An [`OrderPlan`] holds every random draw for the order, made up front from the
//! run seed and the order id (see [`crate::worker::plan`]). The order task owns its
//! plan and reports an [`OrderReport`] when it terminates.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;

/// Type-safe identifier for Orders. Ids are 1-based and follow arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The two kinds of pizza on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pizza {
    Plain,
    Special,
}

/// Everything random about an order, decided before the order enters the kitchen.
///
/// Times are expressed in time units (see
/// [`PizzeriaConfig::time_unit`](crate::config::PizzeriaConfig::time_unit)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlan {
    pub id: OrderId,
    pub pizzas: Vec<Pizza>,
    pub payment_time: u32,
    pub declined: bool,
    pub delivery_time: u32,
}

impl OrderPlan {
    /// Number of pizzas in the order. Always at least one.
    pub fn pizza_count(&self) -> u32 {
        self.pizzas.len() as u32
    }

    pub fn plain_count(&self) -> u32 {
        self.pizzas.iter().filter(|p| **p == Pizza::Plain).count() as u32
    }

    pub fn special_count(&self) -> u32 {
        self.pizza_count() - self.plain_count()
    }

    /// The order's price given the menu prices.
    pub fn price(&self, price_plain: u64, price_special: u64) -> u64 {
        self.plain_count() as u64 * price_plain + self.special_count() as u64 * price_special
    }
}

/// Timings measured for a delivered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Submission until the order was packed and ready to go.
    pub ready_time: Duration,
    /// Submission until the customer received the order.
    pub order_time: Duration,
    /// Bake completion until the customer received the order.
    pub cooling_time: Duration,
}

/// Terminal state of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The order made it to the customer.
    Delivered(DeliveryReport),
    /// Payment failed; the order never entered the kitchen.
    Declined,
    /// The order was aborted by an infrastructure failure.
    Failed(String),
}

impl OrderOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, OrderOutcome::Delivered(_))
    }
}

/// What an order task hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReport {
    pub id: OrderId,
    pub outcome: OrderOutcome,
}
