//! Rule-based stand-in classifier for development without a model file

use crate::{Classifier, InferenceError};
use feature_engine::{column_index, FEATURE_DIMENSION};

/// Deterministic heuristic over unscaled features.
///
/// Living closer to the mountains than the beaches, mountain activities and
/// cold seasons all push towards class 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockClassifier;

const WEIGHTS: [(&str, f64); 8] = [
    ("Preferred_Activities_hiking", 1.5),
    ("Preferred_Activities_skiing", 1.5),
    ("Preferred_Activities_swimming", -1.5),
    ("Preferred_Activities_sunbathing", -1.5),
    ("Favorite_Season_winter", 0.75),
    ("Favorite_Season_fall", 0.25),
    ("Favorite_Season_summer", -0.75),
    ("Favorite_Season_spring", -0.25),
];

/// Logit change per mile of difference in proximity
const PROXIMITY_WEIGHT: f64 = 0.01;

impl MockClassifier {
    fn logit(features: &[f64]) -> f64 {
        let at = |name: &str| column_index(name).map(|i| features[i]).unwrap_or(0.0);

        let proximity = at("Proximity_to_Beaches") - at("Proximity_to_Mountains");
        WEIGHTS
            .iter()
            .fold(PROXIMITY_WEIGHT * proximity, |acc, (name, w)| acc + w * at(*name))
    }
}

impl Classifier for MockClassifier {
    fn n_features(&self) -> usize {
        FEATURE_DIMENSION
    }

    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], InferenceError> {
        if features.len() != FEATURE_DIMENSION {
            return Err(InferenceError::InvalidInputShape {
                expected: FEATURE_DIMENSION,
                actual: features.len(),
            });
        }
        let p_mountains = 1.0 / (1.0 + (-Self::logit(features)).exp());
        Ok([1.0 - p_mountains, p_mountains])
    }
}
