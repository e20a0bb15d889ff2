//! # Pizzeria Configuration
//!
//! Pool sizes, menu prices, probabilities and service times for a run. The
//! [`Default`] values are the reference kitchen; tests shrink or reshape them.
//!
//! All service times are whole time units. One time unit lasts
//! [`PizzeriaConfig::time_unit`] of wall-clock time (one second by default).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

use crate::model::PoolKind;

/// Errors detected while validating a [`PizzeriaConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A pool was configured with no units at all.
    #[error("Pool {0} must have at least one unit")]
    EmptyPool(PoolKind),

    /// A range whose start is after its end.
    #[error("Range {name} is empty: {start}..={end}")]
    EmptyRange { name: &'static str, start: u32, end: u32 },

    /// A percentage above 100.
    #[error("Probability {name} must be at most 100, got {value}")]
    InvalidProbability { name: &'static str, value: u32 },

    /// Orders must contain at least one pizza.
    #[error("Orders must contain at least one pizza")]
    ZeroPizzas,

    /// An order could ask for more oven slots than exist and would never be baked.
    #[error("Orders of up to {max_pizzas} pizzas cannot fit in {ovens} ovens")]
    OvenTooSmall { max_pizzas: u32, ovens: u32 },

    #[error("Time unit must be longer than zero")]
    ZeroTimeUnit,
}

/// Parameters of a simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzeriaConfig {
    pub cooks: u32,
    pub ovens: u32,
    pub packers: u32,
    pub drivers: u32,

    /// Time between two consecutive customers.
    pub order_interval: RangeInclusive<u32>,
    /// Pizzas per order.
    pub pizzas_per_order: RangeInclusive<u32>,
    /// Percentage of pizzas that are plain.
    pub plain_probability: u32,
    /// Time spent processing a payment.
    pub payment_time: RangeInclusive<u32>,
    /// Percentage of payments that are declined.
    pub decline_probability: u32,

    pub price_plain: u64,
    pub price_special: u64,

    /// Preparation time per pizza.
    pub prep_time: u32,
    /// Baking time for a whole order.
    pub bake_time: u32,
    /// Packing time per pizza.
    pub pack_time: u32,
    /// One-way delivery time.
    pub delivery_time: RangeInclusive<u32>,

    /// Wall-clock length of one time unit.
    pub time_unit: Duration,
    /// Request queue length of every actor.
    pub channel_buffer: usize,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self {
            cooks: 2,
            ovens: 15,
            packers: 2,
            drivers: 10,
            order_interval: 1..=3,
            pizzas_per_order: 1..=5,
            plain_probability: 60,
            payment_time: 1..=3,
            decline_probability: 10,
            price_plain: 10,
            price_special: 12,
            prep_time: 1,
            bake_time: 10,
            pack_time: 1,
            delivery_time: 5..=15,
            time_unit: Duration::from_secs(1),
            channel_buffer: 32,
        }
    }
}

impl PizzeriaConfig {
    /// Size of the given pool.
    pub fn pool_size(&self, kind: PoolKind) -> u32 {
        match kind {
            PoolKind::Preparation => self.cooks,
            PoolKind::Oven => self.ovens,
            PoolKind::Packing => self.packers,
            PoolKind::Delivery => self.drivers,
        }
    }

    /// Wall-clock duration of `units` time units.
    pub fn units(&self, units: u32) -> Duration {
        self.time_unit * units
    }

    /// `duration` expressed in time units, or 0 when the time unit is zero.
    pub fn in_units(&self, duration: Duration) -> f64 {
        if self.time_unit.is_zero() {
            return 0.0;
        }
        duration.as_secs_f64() / self.time_unit.as_secs_f64()
    }

    /// Checks the configuration can run a day without stalling forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_unit.is_zero() {
            return Err(ConfigError::ZeroTimeUnit);
        }
        for kind in PoolKind::ALL {
            if self.pool_size(kind) == 0 {
                return Err(ConfigError::EmptyPool(kind));
            }
        }

        let ranges = [
            ("order_interval", &self.order_interval),
            ("pizzas_per_order", &self.pizzas_per_order),
            ("payment_time", &self.payment_time),
            ("delivery_time", &self.delivery_time),
        ];
        for (name, range) in ranges {
            if range.is_empty() {
                return Err(ConfigError::EmptyRange {
                    name,
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }

        for (name, value) in [
            ("plain_probability", self.plain_probability),
            ("decline_probability", self.decline_probability),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        if *self.pizzas_per_order.start() == 0 {
            return Err(ConfigError::ZeroPizzas);
        }
        let max_pizzas = *self.pizzas_per_order.end();
        if max_pizzas > self.ovens {
            return Err(ConfigError::OvenTooSmall {
                max_pizzas,
                ovens: self.ovens,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_kitchen() {
        let config = PizzeriaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pool_size(PoolKind::Preparation), 2);
        assert_eq!(config.pool_size(PoolKind::Oven), 15);
        assert_eq!(config.pool_size(PoolKind::Packing), 2);
        assert_eq!(config.pool_size(PoolKind::Delivery), 10);
        assert_eq!(config.units(10), Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_empty_pool() {
        let config = PizzeriaConfig {
            drivers: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyPool(PoolKind::Delivery))
        );
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_rejects_empty_range() {
        let config = PizzeriaConfig {
            delivery_time: 15..=5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRange {
                name: "delivery_time",
                start: 15,
                end: 5
            })
        );
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = PizzeriaConfig {
            decline_probability: 101,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { name: "decline_probability", .. })
        ));
    }

    #[test]
    fn test_rejects_orders_larger_than_oven() {
        let config = PizzeriaConfig {
            ovens: 4,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OvenTooSmall {
                max_pizzas: 5,
                ovens: 4
            })
        );

        let config = PizzeriaConfig {
            pizzas_per_order: 0..=3,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPizzas));
    }

    #[test]
    fn test_rejects_zero_time_unit() {
        let config = PizzeriaConfig {
            time_unit: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeUnit));
        assert_eq!(config.in_units(Duration::from_secs(20)), 0.0);

        let config = PizzeriaConfig {
            time_unit: Duration::from_millis(500),
            ..Default::default()
        };
        assert_eq!(config.in_units(Duration::from_secs(3)), 6.0);
    }
}
