//! Range Validator for Form Fields

use crate::error::ValidationError;
use feature_engine::RawInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive ranges for every numeric field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Age in years
    pub age_range: (f64, f64),
    /// Annual income ($)
    pub income_range: (f64, f64),
    /// Trips per year
    pub travel_frequency_range: (f64, f64),
    /// Vacation budget ($)
    pub vacation_budget_range: (f64, f64),
    /// Distance to mountains (miles)
    pub proximity_mountains_range: (f64, f64),
    /// Distance to beaches (miles)
    pub proximity_beaches_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: (18.0, 100.0),
            income_range: (0.0, 500_000.0),
            travel_frequency_range: (0.0, 20.0),
            vacation_budget_range: (0.0, 50_000.0),
            proximity_mountains_range: (0.0, 500.0),
            proximity_beaches_range: (0.0, 500.0),
        }
    }
}

impl ValidationConfig {
    fn ranges(&self) -> [(&'static str, (f64, f64)); 6] {
        [
            ("age", self.age_range),
            ("income", self.income_range),
            ("travel_frequency", self.travel_frequency_range),
            ("vacation_budget", self.vacation_budget_range),
            ("proximity_mountains", self.proximity_mountains_range),
            ("proximity_beaches", self.proximity_beaches_range),
        ]
    }

    /// Reject ranges that no value could satisfy
    pub fn check(&self) -> Result<(), ValidationError> {
        for (field, (min, max)) in self.ranges() {
            if min > max {
                return Err(ValidationError::InvalidRange { field, min, max });
            }
        }
        Ok(())
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for form submissions
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Check every numeric field, collecting all violations
    pub fn validate(&self, raw: &RawInput) -> ValidationResult {
        let values = [
            raw.age,
            raw.income,
            raw.travel_frequency,
            raw.vacation_budget,
            raw.proximity_mountains,
            raw.proximity_beaches,
        ];

        let ranges = self.config.ranges();
        let errors: Vec<ValidationError> = ranges
            .iter()
            .zip(values)
            .filter_map(|((field, range), value)| {
                self.validate_range(*field, f64::from(value), *range).err()
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::valid(ranges.len())
        } else {
            debug!("Rejected input with {} out-of-range fields", errors.len());
            ValidationResult::invalid(errors, ranges.len())
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
