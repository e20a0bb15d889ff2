use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The four finite resources an order passes through, in stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolKind {
    /// Cooks preparing pizzas.
    Preparation,
    /// Oven slots, one per pizza.
    Oven,
    /// Packers.
    Packing,
    /// Delivery drivers.
    Delivery,
}

impl PoolKind {
    pub const ALL: [PoolKind; 4] = [
        PoolKind::Preparation,
        PoolKind::Oven,
        PoolKind::Packing,
        PoolKind::Delivery,
    ];
}

impl Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PoolKind::Preparation => "cooks",
            PoolKind::Oven => "ovens",
            PoolKind::Packing => "packers",
            PoolKind::Delivery => "drivers",
        };
        f.write_str(name)
    }
}

/// Point-in-time view of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    pub kind: PoolKind,
    /// Units free right now.
    pub capacity: u32,
    /// Units the pool was created with.
    pub total: u32,
    /// Orders parked until enough units are free.
    pub waiting: usize,
}

impl PoolStatus {
    /// Units currently held by orders.
    pub fn held(&self) -> u32 {
        self.total - self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity == self.total
    }
}
