//! Layered configuration: defaults, optional file, then environment

use config::{Config, ConfigError, Environment, File};
use data_validator::ValidationConfig;
use inference_engine::EngineConfig;
use serde::Deserialize;
use std::path::Path;

/// Default configuration file looked up in the working directory
/// (`vacation.toml`, `vacation.yaml`, ...)
const DEFAULT_CONFIG_NAME: &str = "vacation";

/// Prefix for environment overrides, e.g. `VACATION__ENGINE__MODEL_PATH`
const ENV_PREFIX: &str = "VACATION";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable logs
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default file is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(
            settings.engine.model_path,
            PathBuf::from("Vacation_Preference_XGBoost_Model.onnx")
        );
        assert!(!settings.engine.mock);
        assert_eq!(settings.validation.age_range, (18.0, 100.0));
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[engine]
model_path = "models/vacation.onnx"
scaler_path = "models/scaler.json"

[validation]
age_range = [21.0, 90.0]

[logging]
level = "debug"
json = true
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.engine.model_path, PathBuf::from("models/vacation.onnx"));
        assert_eq!(
            settings.engine.scaler_path,
            Some(PathBuf::from("models/scaler.json"))
        );
        assert_eq!(settings.validation.age_range, (21.0, 90.0));
        // Unspecified ranges keep their defaults
        assert_eq!(settings.validation.income_range, (0.0, 500_000.0));
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.json);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/vacation.toml"))).is_err());
    }
}
