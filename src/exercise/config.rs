use serde::{Serialize, Deserialize};

use crate::activation::softmax::Stabilization;
use crate::loss::cross_entropy::ProbabilityClamp;

/// Inputs for the cross-entropy driver.
///
/// Fields:
/// - `labels`    — ground-truth values, one per position
/// - `predicted` — predicted probabilities, same length as `labels`
/// - `clamp`     — `"none"` or `{"epsilon": <f64>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossEntropyExercise {
    pub labels: Vec<f64>,
    pub predicted: Vec<f64>,
    pub clamp: ProbabilityClamp,
}

impl Default for CrossEntropyExercise {
    fn default() -> Self {
        CrossEntropyExercise {
            labels: vec![1.0, 0.0, 1.0, 1.0],
            predicted: vec![0.4, 0.6, 0.1, 0.5],
            clamp: ProbabilityClamp::None,
        }
    }
}

/// Inputs for the softmax driver.
///
/// Defaults to the unshifted formula so the driver prints exactly what the
/// textbook definition computes; max-shift is opt-in through the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftmaxExercise {
    pub logits: Vec<f64>,
    pub stabilization: Stabilization,
}

impl Default for SoftmaxExercise {
    fn default() -> Self {
        SoftmaxExercise {
            logits: vec![5.0, 6.0, 7.0, 8.0],
            stabilization: Stabilization::None,
        }
    }
}

/// Inputs for both drivers, loadable from JSON.
///
/// Every field is optional in the file; anything missing falls back to the
/// built-in reference inputs, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub cross_entropy: CrossEntropyExercise,
    pub softmax: SoftmaxExercise,
}

impl ExerciseConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<ExerciseConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Resolves the config from a driver's command-line arguments (program
    /// name already skipped): no argument means the defaults, one argument is
    /// a JSON file path, anything more is rejected.
    pub fn from_args<I>(args: I) -> std::io::Result<ExerciseConfig>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let path = args.next();
        if args.next().is_some() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "expected at most one argument: [CONFIG.json]",
            ));
        }
        match path {
            Some(path) => ExerciseConfig::load_json(&path),
            None => Ok(ExerciseConfig::default()),
        }
    }
}
