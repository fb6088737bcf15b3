//! Classifier Inference Engine
//!
//! Loads the pre-trained mountains-vs-beaches classifier once and runs it on
//! encoded feature vectors.

mod classifier;
mod engine;
mod mock;
mod onnx;

pub use classifier::{Classifier, Prediction, Preference};
pub use engine::{EngineConfig, InferenceEngine, InferenceResult};
pub use mock::MockClassifier;
pub use onnx::OnnxClassifier;

use feature_engine::EncodingError;
use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Model file not found: {0}")]
    ModelUnavailable(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected} features, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
    #[error("Scaler error: {0}")]
    Scaler(#[from] EncodingError),
}
