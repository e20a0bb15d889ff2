//! Pure data structures shared by the actors, the order workers and the dispatcher.

pub mod order;
pub mod pool;
pub mod stats;

pub use order::*;
pub use pool::*;
pub use stats::*;
