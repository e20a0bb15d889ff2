//! # Stats Actor
//!
//! Owns the day's running totals. Every order reports to it twice at most: once
//! when its payment clears ([`StatsRequest::RecordSale`]) and once when it is
//! delivered ([`StatsRequest::RecordDelivery`]). The dispatcher reads a
//! [`StatsSnapshot`](crate::model::StatsSnapshot) after every order has finished.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::StatsClient;
use crate::framework::ResourceActor;

/// Creates a new stats actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<StatsAggregator>, StatsClient) {
    let (actor, generic_client) = ResourceActor::new(StatsAggregator::new(), buffer_size);
    (actor, StatsClient::new(generic_client))
}
