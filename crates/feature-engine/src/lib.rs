//! Feature Encoding Engine
//!
//! Turns one vacation-preference form submission into the fixed 23-column
//! vector expected by the pre-trained classifier.

mod error;
mod features;
mod input;
mod scaler;
mod schema;

pub use error::EncodingError;
pub use features::{FeatureEncoder, FeatureVector};
pub use input::{parse_category, Activity, Category, Education, Gender, Location, RawInput, Season};
pub use scaler::StandardScaler;
pub use schema::{column_index, FEATURE_COLUMNS, FEATURE_DIMENSION, ONE_HOT_GROUPS};
