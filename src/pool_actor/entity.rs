//! [`ActorEntity`] implementation for a counting resource pool.
//!
//! The pool owns `capacity` (units free now) and `total` (units it was created with).
//! `0 <= capacity <= total` holds after every request, and the units held by orders
//! always add up to `total - capacity`.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::actions::PoolRequest;
use super::error::PoolError;
use crate::framework::{ActorEntity, FrameworkError, Response};
use crate::model::{OrderId, PoolKind, PoolStatus};

/// An acquire that could not be served yet.
struct Waiter {
    order: OrderId,
    units: u32,
    respond_to: Response<()>,
}

/// A fixed-size pool of interchangeable units.
pub struct ResourcePool {
    kind: PoolKind,
    capacity: u32,
    total: u32,
    waiters: Vec<Waiter>,
}

impl ResourcePool {
    /// Creates a pool with every unit free.
    pub fn new(kind: PoolKind, total: u32) -> Self {
        Self {
            kind,
            capacity: total,
            total,
            waiters: Vec::new(),
        }
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            kind: self.kind,
            capacity: self.capacity,
            total: self.total,
            waiting: self.waiters.len(),
        }
    }

    fn acquire(&mut self, order: OrderId, units: u32, respond_to: Response<()>) {
        if units == 0 {
            reject(respond_to, PoolError::ZeroUnits { kind: self.kind });
            return;
        }
        if units > self.total {
            warn!(pool = %self.kind, %order, units, total = self.total, "Request can never be served");
            reject(
                respond_to,
                PoolError::ExceedsTotal {
                    kind: self.kind,
                    requested: units,
                    total: self.total,
                },
            );
            return;
        }

        let waiter = Waiter {
            order,
            units,
            respond_to,
        };
        if let Some(waiter) = self.try_grant(waiter) {
            debug!(pool = %self.kind, %order, units, capacity = self.capacity, "Parked");
            self.waiters.push(waiter);
        }
    }

    fn release(&mut self, order: OrderId, units: u32) -> Result<(), PoolError> {
        if units > self.total - self.capacity {
            return Err(PoolError::Overflow {
                kind: self.kind,
                released: units,
                capacity: self.capacity,
                total: self.total,
            });
        }
        self.capacity += units;
        debug!(pool = %self.kind, %order, units, capacity = self.capacity, "Released");
        self.wake_waiters();
        Ok(())
    }

    /// Grants the waiter if its units fit, handing it back otherwise.
    fn try_grant(&mut self, waiter: Waiter) -> Option<Waiter> {
        if waiter.units > self.capacity {
            return Some(waiter);
        }
        self.capacity -= waiter.units;
        if waiter.respond_to.send(Ok(())).is_err() {
            // Nobody is waiting on this grant any more.
            self.capacity += waiter.units;
            debug!(pool = %self.kind, order = %waiter.order, "Acquirer gone, grant returned");
        } else {
            debug!(pool = %self.kind, order = %waiter.order, units = waiter.units, capacity = self.capacity, "Granted");
        }
        None
    }

    /// Rechecks every parked acquire against the new capacity.
    fn wake_waiters(&mut self) {
        let parked = std::mem::take(&mut self.waiters);
        for waiter in parked {
            if let Some(waiter) = self.try_grant(waiter) {
                self.waiters.push(waiter);
            }
        }
    }
}

fn reject(respond_to: Response<()>, error: PoolError) {
    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(error))));
}

#[async_trait]
impl ActorEntity for ResourcePool {
    type Request = PoolRequest;
    type Context = ();

    fn label(&self) -> String {
        self.kind.to_string()
    }

    async fn handle(&mut self, request: PoolRequest, _ctx: &()) {
        match request {
            PoolRequest::Acquire {
                order,
                units,
                respond_to,
            } => self.acquire(order, units, respond_to),
            PoolRequest::Release {
                order,
                units,
                respond_to,
            } => {
                let result = self
                    .release(order, units)
                    .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                if let Err(e) = &result {
                    warn!(pool = %self.kind, %order, error = %e, "Release failed");
                }
                let _ = respond_to.send(result);
            }
            PoolRequest::Status { respond_to } => {
                let _ = respond_to.send(Ok(self.status()));
            }
        }
    }

    async fn on_stop(&mut self, _ctx: &()) {
        if !self.waiters.is_empty() {
            warn!(pool = %self.kind, waiting = self.waiters.len(), "Stopping with parked orders");
        }
        info!(pool = %self.kind, capacity = self.capacity, total = self.total, "Final state");
    }
}
