//! # Pizzeria
//!
//! Runs one simulated day: `pizzeria <customers> <seed>`.
//!
//! Per-order lifecycle messages go to the log (see
//! [`setup_tracing`](pizzeria_sim::lifecycle::setup_tracing)); the closing summary is
//! printed to stdout.

use clap::Parser;
use pizzeria_sim::config::PizzeriaConfig;
use pizzeria_sim::lifecycle::{setup_tracing, Pizzeria};
use tracing::info;

/// Simulates a pizzeria serving a number of customers.
///
/// Given the same seed, every order draws the same pizzas, payment outcome and
/// delivery time.
#[derive(Parser, Debug)]
#[command(name = "pizzeria")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of customers to serve
    customers: u64,

    /// Random seed for the day
    seed: u64,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    info!(customers = args.customers, seed = args.seed, "Opening the pizzeria");
    let pizzeria = Pizzeria::new(PizzeriaConfig::default()).map_err(|e| e.to_string())?;

    let day = pizzeria
        .open_for(args.customers, args.seed)
        .await
        .map_err(|e| e.to_string())?;

    pizzeria.shutdown().await?;

    println!("{}", day.summary);
    Ok(())
}
