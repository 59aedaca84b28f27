use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::error::{MathError, MathResult};

/// How predicted probabilities are treated before taking logarithms.
///
/// - `None`           — use `P[i]` as given. `P[i] == 0` or `P[i] == 1` makes the
///   result `inf` or `NaN`, which is returned as-is.
/// - `Epsilon(eps)`   — clamp each `P[i]` into `[eps, 1 - eps]` first, so the
///   result is finite for finite labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityClamp {
    #[default]
    None,
    Epsilon(f64),
}

impl ProbabilityClamp {
    fn validate(self) -> MathResult<Self> {
        match self {
            ProbabilityClamp::None => Ok(self),
            // Written as a negated range check so NaN is rejected too.
            ProbabilityClamp::Epsilon(eps) if !(eps > 0.0 && eps < 0.5) => {
                Err(MathError::InvalidEpsilon(eps))
            }
            ProbabilityClamp::Epsilon(_) => Ok(self),
        }
    }

    /// True when `p` lies strictly outside the clamp range, where the
    /// clamped loss is constant in `p`.
    fn clips(self, p: f64) -> bool {
        match self {
            ProbabilityClamp::None => false,
            ProbabilityClamp::Epsilon(eps) => p < eps || p > 1.0 - eps,
        }
    }

    fn apply(self, p: f64) -> f64 {
        match self {
            ProbabilityClamp::None => p,
            ProbabilityClamp::Epsilon(eps) => p.clamp(eps, 1.0 - eps),
        }
    }
}

/// Binary cross-entropy summed over every position of a label/prediction pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CrossEntropyLoss {
    clamp: ProbabilityClamp,
}

impl CrossEntropyLoss {
    /// Loss with no clamping: non-finite values propagate.
    pub fn new() -> Self {
        CrossEntropyLoss::default()
    }

    /// Fails with `InvalidEpsilon` unless the epsilon lies in (0, 0.5).
    pub fn with_clamp(clamp: ProbabilityClamp) -> MathResult<Self> {
        Ok(CrossEntropyLoss { clamp: clamp.validate()? })
    }

    pub fn clamp(&self) -> ProbabilityClamp {
        self.clamp
    }

    /// Computes the scalar loss:
    ///   L = -sum(labels[i] * ln(p[i]) + (1 - labels[i]) * ln(1 - p[i]))
    ///
    /// `labels`    — ground truth, conceptually in {0, 1} or [0, 1]
    /// `predicted` — probabilities in (0, 1), same length as `labels`
    pub fn loss(&self, labels: &[f64], predicted: &[f64]) -> MathResult<f64> {
        check_lengths(labels, predicted)?;

        let sum: f64 = labels.iter().zip(predicted.iter())
            .map(|(y, p)| {
                let p = self.clamp.apply(*p);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum();
        let loss = -sum;

        debug!("cross-entropy over {} terms ({:?}): {}", labels.len(), self.clamp, loss);
        if !loss.is_finite() {
            warn!("cross-entropy is not finite ({}); a prediction is at 0 or 1", loss);
        }
        Ok(loss)
    }

    /// Gradient of the loss with respect to each prediction:
    ///   ∂L/∂p[i] = -labels[i] / p[i] + (1 - labels[i]) / (1 - p[i])
    ///
    /// With an `Epsilon` clamp, positions whose `p[i]` falls outside
    /// `[eps, 1 - eps]` get a gradient of 0: the clamped loss does not move
    /// there.
    pub fn derivative(&self, labels: &[f64], predicted: &[f64]) -> MathResult<Vec<f64>> {
        check_lengths(labels, predicted)?;

        Ok(labels.iter().zip(predicted.iter())
            .map(|(y, &p)| {
                if self.clamp.clips(p) {
                    return 0.0;
                }
                -y / p + (1.0 - y) / (1.0 - p)
            })
            .collect())
    }
}

/// Cross-entropy with the default (unclamped) behaviour.
pub fn cross_entropy(labels: &[f64], predicted: &[f64]) -> MathResult<f64> {
    CrossEntropyLoss::new().loss(labels, predicted)
}

fn check_lengths(labels: &[f64], predicted: &[f64]) -> MathResult<()> {
    if labels.len() != predicted.len() {
        return Err(MathError::LengthMismatch {
            labels: labels.len(),
            predicted: predicted.len(),
        });
    }
    Ok(())
}
