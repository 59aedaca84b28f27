use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::error::{MathError, MathResult};

/// Whether logits are shifted before exponentiation.
///
/// - `None`     — `exp(L[i]) / sum(exp(L))` exactly as written. Logits above
///   roughly 709 overflow `exp` to `inf`; logits all below roughly -745
///   underflow every `exp` to 0 and the division is `0 / 0`. Either way every
///   output becomes `NaN`.
/// - `MaxShift` — subtract `max(L)` from every logit first. Same result in exact
///   arithmetic, but the largest exponent is always `exp(0) = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stabilization {
    None,
    #[default]
    MaxShift,
}

/// Vector-valued softmax activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Softmax {
    stabilization: Stabilization,
}

impl Softmax {
    pub fn new() -> Self {
        Softmax::default()
    }

    pub fn with_stabilization(stabilization: Stabilization) -> Self {
        Softmax { stabilization }
    }

    pub fn stabilization(&self) -> Stabilization {
        self.stabilization
    }

    /// Maps logits to a probability distribution of the same length:
    ///   R[i] = exp(L[i]) / sum_j exp(L[j])
    ///
    /// Fails only on an empty slice. Overflow and underflow are reported
    /// through `NaN` outputs, never as an error.
    pub fn apply(&self, logits: &[f64]) -> MathResult<Vec<f64>> {
        if logits.is_empty() {
            return Err(MathError::EmptyInput);
        }

        let shift = match self.stabilization {
            Stabilization::None => 0.0,
            Stabilization::MaxShift => logits.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
        };

        let exps: Vec<f64> = logits.iter().map(|&x| (x - shift).exp()).collect();
        let sum_exps: f64 = exps.iter().sum();
        debug!("softmax over {} logits ({:?}, shift {}): exp sum {}",
            logits.len(), self.stabilization, shift, sum_exps);

        let probs: Vec<f64> = exps.iter().map(|&e| e / sum_exps).collect();
        if probs.iter().any(|p| !p.is_finite()) {
            warn!("softmax produced non-finite output (exp sum {})", sum_exps);
        }
        Ok(probs)
    }

    /// Jacobian of the softmax output with respect to its logits:
    ///   J[i][j] = R[i] * (δ_ij - R[j])
    ///
    /// Row `i` describes how output `i` moves with every logit.
    pub fn jacobian(&self, logits: &[f64]) -> MathResult<Vec<Vec<f64>>> {
        let probs = self.apply(logits)?;
        Ok(probs.iter().enumerate()
            .map(|(i, &p_i)| {
                probs.iter().enumerate()
                    .map(|(j, &p_j)| if i == j { p_i * (1.0 - p_j) } else { -p_i * p_j })
                    .collect()
            })
            .collect())
    }
}

/// Softmax with the default (max-shift) stabilization.
pub fn softmax(logits: &[f64]) -> MathResult<Vec<f64>> {
    Softmax::new().apply(logits)
}
