pub mod config;
pub mod runner;

pub use config::{ExerciseConfig, CrossEntropyExercise, SoftmaxExercise};
pub use runner::{run_cross_entropy, run_softmax};
