//! Prints the cross-entropy of the reference labels and predictions.
//!
//! Run with:
//!   cargo run --bin cross-entropy
//!   cargo run --bin cross-entropy -- my_inputs.json
//!
//! Set RUST_LOG=debug to see the intermediate values.

use anyhow::Context;
use basic_concepts::{exercise::run_cross_entropy, ExerciseConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ExerciseConfig::from_args(std::env::args().skip(1))
        .context("failed to load exercise config")?;
    let loss = run_cross_entropy(&config.cross_entropy)
        .context("cross-entropy failed")?;

    println!("{}", loss);
    Ok(())
}
