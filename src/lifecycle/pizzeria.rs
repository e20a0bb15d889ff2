use std::sync::Arc;
use tracing::{error, info};

use super::dispatcher::{DayReport, Dispatcher};
use crate::clients::Kitchen;
use crate::config::{ConfigError, PizzeriaConfig};
use crate::model::PoolKind;
use crate::stats_actor::StatsError;
use crate::{pool_actor, stats_actor};

/// The runtime orchestrator: owns every actor of the kitchen.
///
/// `Pizzeria` is responsible for:
/// - **Lifecycle Management**: Starting the four pool actors and the stats actor, and stopping them
/// - **Wiring**: Bundling their clients into the [`Kitchen`] every order receives
/// - **Running a day**: Handing customers to a [`Dispatcher`]
///
/// # Example
///
/// ```ignore
/// let pizzeria = Pizzeria::new(PizzeriaConfig::default())?;
/// let day = pizzeria.open_for(10, 42).await?;
/// println!("{}", day.summary);
/// pizzeria.shutdown().await?;
/// ```
pub struct Pizzeria {
    config: Arc<PizzeriaConfig>,
    kitchen: Kitchen,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Pizzeria {
    /// Validates `config`, then spawns every actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: PizzeriaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = config.channel_buffer;

        // 1. One actor per pool, sized from the config
        let mut handles = Vec::with_capacity(5);
        let mut pool = |kind: PoolKind| {
            let (actor, client) = pool_actor::new(kind, config.pool_size(kind), buffer);
            handles.push(tokio::spawn(actor.run(())));
            client
        };
        let prep = pool(PoolKind::Preparation);
        let oven = pool(PoolKind::Oven);
        let packing = pool(PoolKind::Packing);
        let delivery = pool(PoolKind::Delivery);

        // 2. The stats actor
        let (stats_actor, stats) = stats_actor::new(buffer);
        handles.push(tokio::spawn(stats_actor.run(())));

        info!(
            cooks = config.cooks,
            ovens = config.ovens,
            packers = config.packers,
            drivers = config.drivers,
            "Kitchen open"
        );

        Ok(Self {
            config: Arc::new(config),
            kitchen: Kitchen {
                prep,
                oven,
                packing,
                delivery,
                stats,
            },
            handles,
        })
    }

    pub fn config(&self) -> &Arc<PizzeriaConfig> {
        &self.config
    }

    pub fn kitchen(&self) -> &Kitchen {
        &self.kitchen
    }

    /// Serves `customers` orders drawn from `seed` and reports on the day.
    pub async fn open_for(&self, customers: u64, seed: u64) -> Result<DayReport, StatsError> {
        Dispatcher::new(self.config.clone(), self.kitchen.clone(), seed)
            .run(customers)
            .await
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the kitchen closes every channel; each actor notices, logs its final
    /// state and exits. Any clone of the kitchen still alive elsewhere keeps its
    /// actors running, so callers must drop theirs first.
    ///
    /// Returns `Err` if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Closing the kitchen...");
        drop(self.kitchen);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Kitchen closed.");
        Ok(())
    }
}
