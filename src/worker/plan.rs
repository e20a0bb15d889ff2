//! Deterministic per-order random draws.
//!
//! Each order gets its own generator seeded from `run_seed + order_id`, so what an
//! order looks like depends only on those two numbers and never on scheduling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::PizzeriaConfig;
use crate::model::{OrderId, OrderPlan, Pizza};

/// The generator owned by one order.
pub fn order_rng(run_seed: u64, id: OrderId) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(run_seed.wrapping_add(id.0))
}

/// Rolls a percentage: `true` with `percent`% probability.
fn roll(rng: &mut ChaCha8Rng, percent: u32) -> bool {
    rng.gen_range(0..100) < percent
}

impl OrderPlan {
    /// Draws pizza count, each pizza's kind, payment time, payment outcome and
    /// delivery time, in that order. `config` must have passed
    /// [`PizzeriaConfig::validate`].
    pub fn draw(run_seed: u64, id: OrderId, config: &PizzeriaConfig) -> Self {
        let mut rng = order_rng(run_seed, id);

        let count = rng.gen_range(config.pizzas_per_order.clone());
        let pizzas = (0..count)
            .map(|_| {
                if roll(&mut rng, config.plain_probability) {
                    Pizza::Plain
                } else {
                    Pizza::Special
                }
            })
            .collect();
        let payment_time = rng.gen_range(config.payment_time.clone());
        let declined = roll(&mut rng, config.decline_probability);
        let delivery_time = rng.gen_range(config.delivery_time.clone());

        Self {
            id,
            pizzas,
            payment_time,
            declined,
            delivery_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_and_id_give_same_plan() {
        let config = PizzeriaConfig::default();
        for id in 1..=20 {
            let a = OrderPlan::draw(42, OrderId(id), &config);
            let b = OrderPlan::draw(42, OrderId(id), &config);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_orders_draw_independently() {
        let config = PizzeriaConfig::default();
        let plans: Vec<_> = (1..=20)
            .map(|id| OrderPlan::draw(42, OrderId(id), &config))
            .collect();
        assert!(plans.windows(2).any(|pair| pair[0].pizzas != pair[1].pizzas
            || pair[0].delivery_time != pair[1].delivery_time));
    }

    #[test]
    fn test_draws_stay_in_range() {
        let config = PizzeriaConfig::default();
        for id in 1..=500 {
            let plan = OrderPlan::draw(7, OrderId(id), &config);
            assert!((1..=5).contains(&plan.pizza_count()));
            assert!((1..=3).contains(&plan.payment_time));
            assert!((5..=15).contains(&plan.delivery_time));
            assert_eq!(plan.plain_count() + plan.special_count(), plan.pizza_count());
        }
    }

    #[test]
    fn test_probabilities_at_the_extremes() {
        let config = PizzeriaConfig {
            plain_probability: 100,
            decline_probability: 0,
            ..Default::default()
        };
        for id in 1..=100 {
            let plan = OrderPlan::draw(3, OrderId(id), &config);
            assert!(!plan.declined);
            assert_eq!(plan.special_count(), 0);
        }

        let config = PizzeriaConfig {
            plain_probability: 0,
            decline_probability: 100,
            ..Default::default()
        };
        for id in 1..=100 {
            let plan = OrderPlan::draw(3, OrderId(id), &config);
            assert!(plan.declined);
            assert_eq!(plan.plain_count(), 0);
        }
    }

    #[test]
    fn test_price_uses_menu() {
        let plan = OrderPlan {
            id: OrderId(1),
            pizzas: vec![Pizza::Plain, Pizza::Special, Pizza::Special],
            payment_time: 1,
            declined: false,
            delivery_time: 5,
        };
        assert_eq!(plan.price(10, 12), 34);
    }
}
