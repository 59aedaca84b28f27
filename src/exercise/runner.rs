use log::info;

use crate::activation::softmax::Softmax;
use crate::error::MathResult;
use crate::exercise::config::{CrossEntropyExercise, SoftmaxExercise};
use crate::loss::cross_entropy::CrossEntropyLoss;

/// Computes the cross-entropy described by `exercise`.
pub fn run_cross_entropy(exercise: &CrossEntropyExercise) -> MathResult<f64> {
    info!(
        "cross-entropy: {} labels, {} predictions, clamp {:?}",
        exercise.labels.len(),
        exercise.predicted.len(),
        exercise.clamp
    );
    CrossEntropyLoss::with_clamp(exercise.clamp)?
        .loss(&exercise.labels, &exercise.predicted)
}

/// Computes the softmax described by `exercise`.
pub fn run_softmax(exercise: &SoftmaxExercise) -> MathResult<Vec<f64>> {
    info!("softmax: {} logits, {:?}", exercise.logits.len(), exercise.stabilization);
    Softmax::with_stabilization(exercise.stabilization).apply(&exercise.logits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::softmax::Stabilization;
    use crate::error::MathError;
    use crate::loss::cross_entropy::ProbabilityClamp;

    #[test]
    fn test_default_exercises() {
        let loss = run_cross_entropy(&CrossEntropyExercise::default()).unwrap();
        assert!((loss - 4.8283137373).abs() < 1e-9, "got {}", loss);

        let probs = run_softmax(&SoftmaxExercise::default()).unwrap();
        assert_eq!(probs.len(), 4);
        assert!((probs[3] - 0.6439142).abs() < 1e-7, "got {}", probs[3]);
    }

    #[test]
    fn test_default_softmax_is_unshifted_formula() {
        let probs = run_softmax(&SoftmaxExercise::default()).unwrap();
        let raw = Softmax::with_stabilization(Stabilization::None)
            .apply(&[5.0, 6.0, 7.0, 8.0])
            .unwrap();
        let bits = |v: Vec<f64>| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(probs), bits(raw));
    }

    #[test]
    fn test_invalid_clamp_is_reported() {
        let exercise = CrossEntropyExercise {
            clamp: ProbabilityClamp::Epsilon(0.75),
            ..CrossEntropyExercise::default()
        };
        assert_eq!(run_cross_entropy(&exercise).unwrap_err(), MathError::InvalidEpsilon(0.75));
    }
}
