//! # Observability & Tracing
//!
//! Every order runs inside an `order` span carrying its id, so each lifecycle
//! message ("Processing payment", "Order is in the oven", ...) is tagged with the
//! order it belongs to. Pools log grants and releases at `debug`.
//!
//! ```bash
//! # Order lifecycle (default)
//! RUST_LOG=info pizzeria 10 42
//!
//! # Every stage transition and pool grant
//! RUST_LOG=debug pizzeria 10 42
//! ```
//!
//! With `RUST_LOG=info` a delivered order reads:
//!
//! ```text
//! INFO order: Processing payment id=order_3
//! INFO order: Payment accepted price=34 pizzas=3 id=order_3
//! INFO order: Order now being prepared id=order_3
//! INFO order: Order is in the oven id=order_3
//! INFO order: Order is being packed id=order_3
//! INFO order: Order ready for delivery ready_in=19.0 id=order_3
//! INFO order: Order delivered! Enjoy your pizza delivered_in=31.0 cooled_for=15.0 id=order_3
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Honors `RUST_LOG`, defaulting to `info`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // Don't show module paths - spans carry the order id
        .compact() // Compact format shows spans inline (e.g., "order: Processing payment")
        .init();
}
