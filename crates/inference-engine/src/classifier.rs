//! Classifier Seam

use crate::InferenceError;
use serde::{Deserialize, Serialize};

/// Predicted vacation preference. Class indices follow the training labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Class 0
    Beaches,
    /// Class 1
    Mountains,
}

impl Preference {
    /// Class index in the model output
    pub fn class_index(&self) -> usize {
        match self {
            Preference::Beaches => 0,
            Preference::Mountains => 1,
        }
    }

    /// Pick the more probable class; ties go to beaches
    pub fn from_probabilities(probabilities: &[f64; 2]) -> Self {
        if probabilities[1] > probabilities[0] {
            Preference::Mountains
        } else {
            Preference::Beaches
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Beaches => "beaches",
            Preference::Mountains => "mountains",
        }
    }

    /// What people with this preference tend to enjoy
    pub fn highlights(&self) -> &'static [&'static str] {
        match self {
            Preference::Mountains => &[
                "Fresh mountain air and scenic views",
                "Hiking trails and outdoor adventures",
                "Cooler temperatures and peaceful environments",
                "Activities like hiking, skiing, or mountain biking",
            ],
            Preference::Beaches => &[
                "Sandy beaches and ocean waves",
                "Swimming and water sports",
                "Warm weather and sunshine",
                "Activities like sunbathing, surfing, or beach volleyball",
            ],
        }
    }
}

/// Prediction for one feature vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class
    pub preference: Preference,
    /// Probability of the predicted class (0.0 to 1.0)
    pub confidence: f64,
    /// `[p_beaches, p_mountains]`
    pub probabilities: [f64; 2],
}

impl Prediction {
    /// Build a prediction from a class distribution
    pub fn from_probabilities(probabilities: [f64; 2]) -> Self {
        let preference = Preference::from_probabilities(&probabilities);
        Self {
            preference,
            confidence: probabilities[preference.class_index()],
            probabilities,
        }
    }
}

/// A pre-trained binary classifier over encoded features
pub trait Classifier: Send + Sync {
    /// Input width the classifier was trained on
    fn n_features(&self) -> usize;

    /// Class distribution `[p_beaches, p_mountains]`
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], InferenceError>;

    /// Most probable class
    fn predict(&self, features: &[f64]) -> Result<Preference, InferenceError> {
        let probabilities = self.predict_proba(features)?;
        Ok(Preference::from_probabilities(&probabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_probability_of_predicted_class() {
        let p = Prediction::from_probabilities([0.2, 0.8]);
        assert_eq!(p.preference, Preference::Mountains);
        assert_eq!(p.confidence, 0.8);

        let p = Prediction::from_probabilities([0.7, 0.3]);
        assert_eq!(p.preference, Preference::Beaches);
        assert_eq!(p.confidence, 0.7);
    }

    #[test]
    fn test_tie_goes_to_beaches() {
        assert_eq!(Preference::from_probabilities(&[0.5, 0.5]), Preference::Beaches);
    }

    #[test]
    fn test_class_mapping() {
        assert_eq!(Preference::Mountains.class_index(), 1);
        assert_eq!(Preference::Beaches.class_index(), 0);
    }

    #[test]
    fn test_serializes_lowercase() {
        let p = Prediction::from_probabilities([0.1, 0.9]);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["preference"], "mountains");
        assert_eq!(json["probabilities"][1], 0.9);
    }
}
