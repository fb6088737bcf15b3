//! Vacation Preference Command-Line Form
//!
//! Collects one submission, validates and encodes it, and renders the
//! classifier's verdict.

pub mod cli;
mod error;
pub mod render;
pub mod settings;

pub use cli::{Cli, Command, OutputFormat, PredictArgs};
pub use error::CliError;
pub use settings::{LoggingSettings, Settings};

use data_validator::Validator;
use feature_engine::FeatureEncoder;
use inference_engine::InferenceEngine;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to set tracing subscriber: {e}");
    }
}

/// Execute a parsed command against loaded settings, writing results to `out`
pub fn execute(command: Command, mut settings: Settings, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Schema => render::render_schema(out)?,
        Command::Predict(args) => {
            if let Some(model) = &args.model {
                settings.engine.model_path = model.clone();
            }
            if let Some(scaler) = &args.scaler {
                settings.engine.scaler_path = Some(scaler.clone());
            }
            settings.engine.mock |= args.mock;
            predict(&args, &settings, out)?;
        }
    }
    Ok(())
}

fn predict(args: &PredictArgs, settings: &Settings, out: &mut impl Write) -> Result<(), CliError> {
    let raw = args.raw_input()?;
    debug!(?raw, "Received submission");

    settings.validation.check()?;
    let validation = Validator::new(settings.validation.clone()).validate(&raw);
    if !validation.valid {
        return Err(CliError::InvalidInput(validation.errors));
    }

    let features = FeatureEncoder::encode(&raw);
    if args.show_features && args.format == OutputFormat::Text {
        render::render_features(out, &features)?;
        writeln!(out)?;
    }

    let engine = InferenceEngine::new(&settings.engine)?;
    debug!(
        model = engine.model_path(),
        loaded = engine.is_loaded(),
        scaled = engine.is_scaled(),
        "Engine ready"
    );
    let result = engine.predict(&features)?;
    info!(
        preference = result.prediction.preference.as_str(),
        confidence = result.prediction.confidence,
        latency_us = result.latency_us,
        "Prediction complete"
    );

    match args.format {
        OutputFormat::Text => render::render_prediction(out, &result.prediction)?,
        OutputFormat::Json => render::render_json(
            out,
            &raw,
            &result.prediction,
            args.show_features.then_some(&features),
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use inference_engine::InferenceError;

    fn run(argv: &[&str], settings: Settings) -> (Result<(), CliError>, String) {
        let cli = Cli::try_parse_from(["vacation-predict"].iter().chain(argv.iter())).unwrap();
        let mut buf = Vec::new();
        let result = execute(cli.command, settings, &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_schema_command() {
        let (result, out) = run(&["schema"], Settings::default());
        result.unwrap();
        assert_eq!(out.lines().count(), 23);
    }

    #[test]
    fn test_mock_prediction_text() {
        let (result, out) = run(
            &[
                "predict",
                "--mock",
                "--activities",
                "skiing",
                "--proximity-mountains",
                "5",
                "--proximity-beaches",
                "400",
            ],
            Settings::default(),
        );
        result.unwrap();
        assert!(out.starts_with("You prefer MOUNTAINS!"));
        assert!(out.contains("Confidence: "));
    }

    #[test]
    fn test_show_features_prints_vector_first() {
        let (result, out) = run(&["predict", "--mock", "--show-features"], Settings::default());
        result.unwrap();
        assert!(out.starts_with("Encoded features:"));
        assert!(out.contains("Gender_male"));
    }

    #[test]
    fn test_mock_prediction_json() {
        let (result, out) = run(&["predict", "--mock", "--format", "json"], Settings::default());
        result.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let p = &json["prediction"]["probabilities"];
        let sum = p[0].as_f64().unwrap() + p[1].as_f64().unwrap();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(json.get("features").is_none());
    }

    #[test]
    fn test_out_of_range_input_is_rejected_before_inference() {
        let (result, out) = run(&["predict", "--mock", "--age", "17", "--income", "900000"], Settings::default());
        match result {
            Err(CliError::InvalidInput(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected invalid input, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_model_reports_error() {
        let (result, _) = run(
            &["predict", "--model", "/nonexistent/Vacation_Preference_XGBoost_Model.onnx"],
            Settings::default(),
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::Inference(InferenceError::ModelUnavailable(_))
        ));
        assert!(err.hint().unwrap().contains("Vacation_Preference_XGBoost_Model.onnx"));
    }
}
