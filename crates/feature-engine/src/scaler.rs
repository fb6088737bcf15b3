//! Standard Scaler fitted at training time
//!
//! Loaded from a JSON artifact exported next to the classifier. It is never
//! refitted on request data: a single row has zero variance.

use crate::error::EncodingError;
use crate::features::FeatureVector;
use crate::schema::{FEATURE_COLUMNS, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Per-column z-score parameters. Deserializing validates the shape, so a
/// scaler that exists always has `FEATURE_DIMENSION` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerArtifact")]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
    /// Column names seen during fitting, if the exporter recorded them
    #[serde(skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
}

/// On-disk layout before validation
#[derive(Deserialize)]
struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

impl TryFrom<ScalerArtifact> for StandardScaler {
    type Error = EncodingError;

    fn try_from(artifact: ScalerArtifact) -> Result<Self, Self::Error> {
        let scaler = Self {
            mean: artifact.mean,
            scale: artifact.scale,
            feature_names: artifact.feature_names,
        };
        scaler.validate()?;
        Ok(scaler)
    }
}

impl StandardScaler {
    /// Build a scaler from explicit parameters
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, EncodingError> {
        let scaler = Self {
            mean,
            scale,
            feature_names: None,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Parse and validate a JSON artifact
    pub fn from_json(json: &str) -> Result<Self, EncodingError> {
        let artifact: ScalerArtifact =
            serde_json::from_str(json).map_err(|e| EncodingError::ScalerFormat(e.to_string()))?;
        Self::try_from(artifact)
    }

    /// Read and validate a JSON artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EncodingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| EncodingError::ScalerIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let scaler = Self::from_json(&json)?;
        info!("Loaded scaler from {}", path.display());
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), EncodingError> {
        for (field, values) in [("mean", &self.mean), ("scale", &self.scale)] {
            if values.len() != FEATURE_DIMENSION {
                return Err(EncodingError::ScalerShape {
                    field,
                    expected: FEATURE_DIMENSION,
                    actual: values.len(),
                });
            }
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(EncodingError::NonFinite {
                    field,
                    column: FEATURE_COLUMNS[i],
                });
            }
        }

        if let Some(names) = &self.feature_names {
            if names.len() != FEATURE_DIMENSION {
                return Err(EncodingError::ScalerShape {
                    field: "feature_names",
                    expected: FEATURE_DIMENSION,
                    actual: names.len(),
                });
            }
            for (index, (actual, expected)) in names.iter().zip(FEATURE_COLUMNS).enumerate() {
                if actual != expected {
                    return Err(EncodingError::ColumnMismatch {
                        index,
                        expected,
                        actual: actual.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply `(x - mean) / scale` column-wise. A zero scale marks a constant
    /// training column and is treated as 1.
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; FEATURE_DIMENSION];
        for (i, x) in features.values().iter().enumerate() {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            out[i] = (x - self.mean[i]) / scale;
        }
        FeatureVector::from_values(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureEncoder;
    use crate::input::RawInput;
    use std::io::Write;

    fn params(mean: f64, scale: f64) -> (Vec<f64>, Vec<f64>) {
        (vec![mean; FEATURE_DIMENSION], vec![scale; FEATURE_DIMENSION])
    }

    #[test]
    fn test_transform_applies_z_score() {
        let (mut mean, mut scale) = params(0.0, 1.0);
        mean[0] = 40.0;
        scale[0] = 10.0;
        let scaler = StandardScaler::new(mean, scale).unwrap();

        let features = FeatureEncoder::encode(&RawInput::default());
        let scaled = scaler.transform(&features);

        assert!((scaled.get("Age").unwrap() - (-1.0)).abs() < 1e-12);
        assert_eq!(scaled.get("Income"), features.get("Income"));
    }

    #[test]
    fn test_zero_scale_only_centers() {
        let (mut mean, scale) = params(0.0, 0.0);
        mean[1] = 50_000.0;
        let scaler = StandardScaler::new(mean, scale).unwrap();

        let scaled = scaler.transform(&FeatureEncoder::encode(&RawInput::default()));
        assert_eq!(scaled.get("Income"), Some(0.0));
        assert_eq!(scaled.get("Age"), Some(30.0));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let err = StandardScaler::new(vec![0.0; 22], vec![1.0; FEATURE_DIMENSION]).unwrap_err();
        assert_eq!(
            err,
            EncodingError::ScalerShape {
                field: "mean",
                expected: FEATURE_DIMENSION,
                actual: 22,
            }
        );
    }

    #[test]
    fn test_rejects_non_finite_scale() {
        let (mean, mut scale) = params(0.0, 1.0);
        scale[5] = f64::NAN;
        let err = StandardScaler::new(mean, scale).unwrap_err();
        assert_eq!(
            err,
            EncodingError::NonFinite {
                field: "scale",
                column: "Proximity_to_Mountains",
            }
        );
    }

    #[test]
    fn test_rejects_reordered_feature_names() {
        let mut names: Vec<String> = FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect();
        names.swap(9, 10);
        let json = serde_json::json!({
            "mean": vec![0.0; FEATURE_DIMENSION],
            "scale": vec![1.0; FEATURE_DIMENSION],
            "feature_names": names,
        })
        .to_string();

        match StandardScaler::from_json(&json) {
            Err(EncodingError::ColumnMismatch { index, expected, actual }) => {
                assert_eq!(index, 9);
                assert_eq!(expected, "Gender_female");
                assert_eq!(actual, "Gender_male");
            }
            other => panic!("expected column mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            StandardScaler::from_json("{\"mean\": []"),
            Err(EncodingError::ScalerFormat(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let err = serde_json::from_str::<StandardScaler>(r#"{"mean":[0.0],"scale":[1.0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Scaler mean has 1 columns, expected 23"));
    }

    #[test]
    fn test_serialized_scaler_deserializes_back() {
        let (mean, scale) = params(2.0, 3.0);
        let scaler = StandardScaler::new(mean, scale).unwrap();
        let json = serde_json::to_string(&scaler).unwrap();
        assert_eq!(serde_json::from_str::<StandardScaler>(&json).unwrap(), scaler);
    }

    #[test]
    fn test_load_from_file() {
        let names: Vec<&str> = FEATURE_COLUMNS.to_vec();
        let json = serde_json::json!({
            "mean": vec![1.0; FEATURE_DIMENSION],
            "scale": vec![2.0; FEATURE_DIMENSION],
            "feature_names": names,
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();

        let scaler = StandardScaler::load(file.path()).unwrap();
        let scaled = scaler.transform(&FeatureEncoder::encode(&RawInput::default()));
        assert_eq!(scaled.get("Age"), Some(14.5));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StandardScaler::load("/nonexistent/scaler.json").unwrap_err();
        assert!(matches!(err, EncodingError::ScalerIo { .. }));
    }
}
