//! Generic actor framework for shared kitchen state.
//!
//! This module provides the building blocks for actors that own exactly one piece of
//! shared state (a resource pool, the day's statistics) and serialize every access to it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that actor-owned state implements
//! - [`ResourceActor`] - Generic actor that runs the message loop
//! - [`ResourceClient`] - Type-safe, cloneable handle to an actor
//! - [`FrameworkError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use core::*;
