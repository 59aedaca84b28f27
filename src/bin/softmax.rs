//! Prints the softmax of the reference logits.
//!
//! Run with:
//!   cargo run --bin softmax
//!   cargo run --bin softmax -- my_inputs.json

use anyhow::Context;
use basic_concepts::{exercise::run_softmax, ExerciseConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ExerciseConfig::from_args(std::env::args().skip(1))
        .context("failed to load exercise config")?;
    let probs = run_softmax(&config.softmax)
        .context("softmax failed")?;

    println!("{:?}", probs);
    Ok(())
}
