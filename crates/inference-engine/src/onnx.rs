//! ONNX Classifier backed by tract

use crate::{Classifier, InferenceError};
use std::path::Path;
use tracing::{debug, info, warn};
use tract_onnx::prelude::*;

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Classifier exported to ONNX (e.g. an XGBoost model converted with
/// onnxmltools). Expects a single `[batch, n_features]` float input.
pub struct OnnxClassifier {
    plan: OnnxPlan,
    n_features: usize,
}

impl OnnxClassifier {
    /// Load and optimize a model, failing fast when its declared input width
    /// differs from `expected_features`
    pub fn load(path: impl AsRef<Path>, expected_features: usize) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading ONNX classifier from {}", path.display());

        let load_err = |e: TractError| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e));

        let typed = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.into_typed())
            .map_err(load_err)?;

        let declared = typed
            .input_fact(0)
            .map_err(load_err)?
            .shape
            .iter()
            .last()
            .and_then(|dim| dim.to_i64().ok());

        match declared {
            Some(width) if width != expected_features as i64 => {
                return Err(InferenceError::InvalidInputShape {
                    expected: expected_features,
                    actual: width.max(0) as usize,
                });
            }
            Some(_) => debug!("Model input width matches {} features", expected_features),
            None => warn!(
                "Model does not declare its input width; assuming {} features",
                expected_features
            ),
        }

        let plan = typed
            .into_optimized()
            .and_then(|model| model.into_runnable())
            .map_err(load_err)?;

        info!("ONNX classifier ready");
        Ok(Self {
            plan,
            n_features: expected_features,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], InferenceError> {
        if features.len() != self.n_features {
            return Err(InferenceError::InvalidInputShape {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let row: Vec<f32> = features.iter().map(|v| *v as f32).collect();
        let input = Tensor::from_shape(&[1, row.len()], &row)
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        probabilities_from_outputs(&outputs)
    }
}

/// Converted classifiers emit a label tensor plus a `[1, 2]` float
/// distribution; logistic heads emit a single positive-class probability.
fn probabilities_from_outputs(outputs: &[TValue]) -> Result<[f64; 2], InferenceError> {
    let floats = outputs
        .iter()
        .filter(|t| t.datum_type() == f32::datum_type())
        .map(|t| t.as_slice::<f32>())
        .filter_map(Result::ok);

    let mut single = None;
    for values in floats {
        match values {
            [p0, p1] => return checked([f64::from(*p0), f64::from(*p1)]),
            [p] if single.is_none() => single = Some(f64::from(*p)),
            _ => {}
        }
    }

    match single {
        Some(p) => checked([1.0 - p, p]),
        None => Err(InferenceError::InferenceFailed(
            "model produced no class probability output".to_string(),
        )),
    }
}

/// Allowed drift of `p0 + p1` from 1, covering f32 rounding in the model
const SUM_TOLERANCE: f64 = 1e-3;

fn checked(probabilities: [f64; 2]) -> Result<[f64; 2], InferenceError> {
    if !probabilities.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)) {
        return Err(InferenceError::InferenceFailed(format!(
            "probabilities out of range: {:?}",
            probabilities
        )));
    }
    let sum = probabilities[0] + probabilities[1];
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(InferenceError::InferenceFailed(format!(
            "probabilities sum to {sum}, not 1: {:?}",
            probabilities
        )));
    }
    Ok(probabilities)
}
