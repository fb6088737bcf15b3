//! CLI Error Types

use data_validator::ValidationError;
use inference_engine::InferenceError;
use thiserror::Error;

/// Errors surfaced to the user by the command-line form
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read input {path}: {reason}")]
    Input { path: String, reason: String },

    #[error("Invalid input: {}", join(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Extra guidance printed after the error message
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Inference(InferenceError::ModelUnavailable(path)) => Some(format!(
                "Please make sure the model file '{}' exists, or set engine.model_path.",
                path
            )),
            CliError::InvalidInput(_) => Some("Adjust the values above and try again.".to_string()),
            _ => None,
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
