//! Inference Engine Implementation

use crate::{Classifier, InferenceError, MockClassifier, OnnxClassifier, Prediction};
use feature_engine::{FeatureVector, StandardScaler, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Where to find the model artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// ONNX classifier artifact
    pub model_path: PathBuf,
    /// Scaler fitted at training time, if the model expects scaled input
    pub scaler_path: Option<PathBuf>,
    /// Use the rule-based mock instead of a model file
    pub mock: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("Vacation_Preference_XGBoost_Model.onnx"),
            scaler_path: None,
            mock: false,
        }
    }
}

/// Result of inference operation
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// The prediction
    pub prediction: Prediction,
    /// Inference latency in microseconds
    pub latency_us: u64,
}

/// Classifier plus optional scaler, loaded once per process
pub struct InferenceEngine {
    /// Model path
    model_path: String,
    /// Absent when the artifact could not be found
    classifier: Option<Box<dyn Classifier>>,
    scaler: Option<StandardScaler>,
}

impl InferenceEngine {
    /// Load the artifacts named in `config`.
    ///
    /// A missing model file is not an error: the engine comes up without a
    /// classifier and every `predict` reports `ModelUnavailable`. A model
    /// that exists but cannot be loaded, or a bad scaler, is an error. In
    /// mock mode the scaler is not loaded.
    pub fn new(config: &EngineConfig) -> Result<Self, InferenceError> {
        let mut engine = if config.mock {
            Self::mock()
        } else if config.model_path.exists() {
            let classifier = OnnxClassifier::load(&config.model_path, FEATURE_DIMENSION)?;
            let mut engine = Self::with_classifier(Box::new(classifier))?;
            engine.model_path = config.model_path.display().to_string();
            engine
        } else {
            warn!(
                "Model file {} not found; predictions unavailable",
                config.model_path.display()
            );
            Self {
                model_path: config.model_path.display().to_string(),
                classifier: None,
                scaler: None,
            }
        };

        match &config.scaler_path {
            // The mock heuristic reads raw miles and activity flags
            Some(path) if config.mock => warn!(
                "Mock classifier expects unscaled features; ignoring scaler {}",
                path.display()
            ),
            Some(path) => engine.scaler = Some(StandardScaler::load(path)?),
            None => {}
        }

        Ok(engine)
    }

    /// Wrap an already loaded classifier, checking its input width
    pub fn with_classifier(classifier: Box<dyn Classifier>) -> Result<Self, InferenceError> {
        if classifier.n_features() != FEATURE_DIMENSION {
            return Err(InferenceError::InvalidInputShape {
                expected: FEATURE_DIMENSION,
                actual: classifier.n_features(),
            });
        }
        Ok(Self {
            model_path: "in-memory".to_string(),
            classifier: Some(classifier),
            scaler: None,
        })
    }

    /// Create a mock inference engine for testing
    pub fn mock() -> Self {
        info!("Creating mock inference engine");
        Self {
            model_path: "mock".to_string(),
            classifier: Some(Box::new(MockClassifier)),
            scaler: None,
        }
    }

    /// Scale features with `scaler` before classification
    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Run inference on a feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<InferenceResult, InferenceError> {
        let start = std::time::Instant::now();

        let classifier = self
            .classifier
            .as_ref()
            .ok_or_else(|| InferenceError::ModelUnavailable(self.model_path.clone()))?;

        let scaled;
        let input = match &self.scaler {
            Some(scaler) => {
                scaled = scaler.transform(features);
                &scaled
            }
            None => features,
        };

        let prediction = Prediction::from_probabilities(classifier.predict_proba(input.values())?);

        let latency_us = start.elapsed().as_micros() as u64;
        debug!(
            "Predicted {} (conf={:.3}) in {}us",
            prediction.preference.as_str(),
            prediction.confidence,
            latency_us
        );

        Ok(InferenceResult {
            prediction,
            latency_us,
        })
    }

    /// Check if a classifier is loaded
    pub fn is_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Whether features are scaled before classification
    pub fn is_scaled(&self) -> bool {
        self.scaler.is_some()
    }

    /// Get model path
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}
