//! Feature Vector Assembly

use crate::input::{Category, RawInput};
use crate::schema::{column_index, FEATURE_COLUMNS, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Model input in `FEATURE_COLUMNS` order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_DIMENSION],
}

impl FeatureVector {
    /// Wrap values that are already in schema order
    pub fn from_values(values: [f64; FEATURE_DIMENSION]) -> Self {
        Self { values }
    }

    /// Raw values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a column by name
    pub fn get(&self, column: &str) -> Option<f64> {
        column_index(column).map(|i| self.values[i])
    }

    /// Column names paired with their values
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of columns (always `FEATURE_DIMENSION`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; the width is fixed
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Stateless encoder from form input to model input
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Encode one request.
    ///
    /// Numeric fields are copied verbatim, booleans become 0/1, education is
    /// ordinal and the remaining categories are one-hot in lexical order.
    pub fn encode(raw: &RawInput) -> FeatureVector {
        let mut values = [0.0; FEATURE_DIMENSION];
        let mut idx = 0;

        for v in [
            f64::from(raw.age),
            f64::from(raw.income),
            f64::from(raw.education.ordinal()),
            f64::from(raw.travel_frequency),
            f64::from(raw.vacation_budget),
            f64::from(raw.proximity_mountains),
            f64::from(raw.proximity_beaches),
            flag(raw.pets),
            flag(raw.environmental_concerns),
        ] {
            values[idx] = v;
            idx += 1;
        }

        idx = one_hot(&mut values, idx, raw.gender);
        idx = one_hot(&mut values, idx, raw.activities);
        idx = one_hot(&mut values, idx, raw.location);
        idx = one_hot(&mut values, idx, raw.season);
        debug_assert_eq!(idx, FEATURE_DIMENSION);

        debug!(
            gender = %raw.gender,
            education = %raw.education,
            location = %raw.location,
            activities = %raw.activities,
            season = %raw.season,
            "Encoded {} features",
            idx
        );

        FeatureVector { values }
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Write the indicator group for `value` starting at `start`, returning the
/// next free column
fn one_hot<C: Category>(values: &mut [f64], start: usize, value: C) -> usize {
    let hit = value.index();
    for offset in 0..C::VARIANTS.len() {
        values[start + offset] = flag(offset == hit);
    }
    start + C::VARIANTS.len()
}
