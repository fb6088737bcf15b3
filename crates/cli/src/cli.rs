//! Command-line arguments

use crate::error::CliError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use feature_engine::{Activity, Education, Gender, Location, RawInput, Season};
use std::path::PathBuf;

/// Predict whether you prefer mountains or beaches for your vacation
#[derive(Debug, Parser)]
#[command(name = "vacation-predict", version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict a vacation preference
    Predict(PredictArgs),
    /// Print the model input columns in order
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One form submission. Flags override values read from `--input`; anything
/// left unset keeps the form default.
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Read the submission from a JSON file
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Age in years (18-100)
    #[arg(long)]
    pub age: Option<u32>,
    /// male, female or non-binary
    #[arg(long)]
    pub gender: Option<Gender>,
    /// Annual income in dollars (0-500000)
    #[arg(long)]
    pub income: Option<u32>,
    /// high school, bachelor, master or doctorate
    #[arg(long)]
    pub education: Option<Education>,
    /// urban, suburban or rural
    #[arg(long)]
    pub location: Option<Location>,
    /// Trips per year (0-20)
    #[arg(long)]
    pub travel_frequency: Option<u32>,
    /// Vacation budget in dollars (0-50000)
    #[arg(long)]
    pub vacation_budget: Option<u32>,
    /// hiking, swimming, skiing or sunbathing
    #[arg(long)]
    pub activities: Option<Activity>,
    /// summer, winter, spring or fall
    #[arg(long)]
    pub season: Option<Season>,
    /// Distance to mountains in miles (0-500)
    #[arg(long)]
    pub proximity_mountains: Option<u32>,
    /// Distance to beaches in miles (0-500)
    #[arg(long)]
    pub proximity_beaches: Option<u32>,
    /// You have pets (`--pets=false` clears a value from `--input`)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub pets: Option<bool>,
    /// You have environmental concerns
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub environmental_concerns: Option<bool>,

    /// Classifier artifact (overrides engine.model_path)
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Scaler artifact (overrides engine.scaler_path)
    #[arg(long)]
    pub scaler: Option<PathBuf>,
    /// Use the rule-based mock classifier
    #[arg(long)]
    pub mock: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Also print the encoded feature vector
    #[arg(long)]
    pub show_features: bool,
}

impl PredictArgs {
    /// Assemble the submission from `--input` and the field flags
    pub fn raw_input(&self) -> Result<RawInput, CliError> {
        let mut raw = match &self.input {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| CliError::Input {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                serde_json::from_str(&json).map_err(|e| CliError::Input {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
            None => RawInput::default(),
        };

        if let Some(v) = self.age {
            raw.age = v;
        }
        if let Some(v) = self.gender {
            raw.gender = v;
        }
        if let Some(v) = self.income {
            raw.income = v;
        }
        if let Some(v) = self.education {
            raw.education = v;
        }
        if let Some(v) = self.location {
            raw.location = v;
        }
        if let Some(v) = self.travel_frequency {
            raw.travel_frequency = v;
        }
        if let Some(v) = self.vacation_budget {
            raw.vacation_budget = v;
        }
        if let Some(v) = self.activities {
            raw.activities = v;
        }
        if let Some(v) = self.season {
            raw.season = v;
        }
        if let Some(v) = self.proximity_mountains {
            raw.proximity_mountains = v;
        }
        if let Some(v) = self.proximity_beaches {
            raw.proximity_beaches = v;
        }
        if let Some(v) = self.pets {
            raw.pets = v;
        }
        if let Some(v) = self.environmental_concerns {
            raw.environmental_concerns = v;
        }

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict_args(args: &[&str]) -> PredictArgs {
        let argv = ["vacation-predict", "predict"].iter().chain(args.iter());
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Predict(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_defaults_match_the_form() {
        let args = predict_args(&[]);
        assert_eq!(args.raw_input().unwrap(), RawInput::default());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_fields() {
        let args = predict_args(&[
            "--age",
            "64",
            "--gender",
            "non-binary",
            "--education",
            "high school",
            "--activities",
            "skiing",
            "--season",
            "winter",
            "--pets",
        ]);
        let raw = args.raw_input().unwrap();
        assert_eq!(raw.age, 64);
        assert_eq!(raw.gender, Gender::NonBinary);
        assert_eq!(raw.education, Education::HighSchool);
        assert_eq!(raw.activities, Activity::Skiing);
        assert_eq!(raw.season, Season::Winter);
        assert!(raw.pets);
        assert!(!raw.environmental_concerns);
    }

    #[test]
    fn test_unknown_category_is_rejected_by_parser() {
        let argv = ["vacation-predict", "predict", "--location", "downtown"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_flags_override_input_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"age": 45, "location": "rural", "proximity_beaches": 300}"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let raw = predict_args(&["--input", path, "--age", "50"])
            .raw_input()
            .unwrap();
        assert_eq!(raw.age, 50);
        assert_eq!(raw.location, Location::Rural);
        assert_eq!(raw.proximity_beaches, 300);
    }

    #[test]
    fn test_boolean_flags_can_clear_input_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"pets": true, "environmental_concerns": true}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let raw = predict_args(&["--input", path, "--pets=false"]).raw_input().unwrap();
        assert!(!raw.pets);
        assert!(raw.environmental_concerns);

        let raw = predict_args(&["--input", path]).raw_input().unwrap();
        assert!(raw.pets);

        let raw = predict_args(&["--environmental-concerns", "--pets=true"])
            .raw_input()
            .unwrap();
        assert!(raw.pets);
        assert!(raw.environmental_concerns);
    }

    #[test]
    fn test_unreadable_input_file() {
        let err = predict_args(&["--input", "/nonexistent/input.json"])
            .raw_input()
            .unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }
}
