pub mod error;
pub mod activation;
pub mod loss;
pub mod exercise;

// Convenience re-exports
pub use error::{MathError, MathResult};
pub use activation::softmax::{softmax, Softmax, Stabilization};
pub use loss::cross_entropy::{cross_entropy, CrossEntropyLoss, ProbabilityClamp};
pub use exercise::config::ExerciseConfig;
