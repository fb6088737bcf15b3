//! Feature Schema
//!
//! Column order the classifier artifact was trained on. Any reordering here
//! produces plausible but wrong predictions without an error.

use std::ops::Range;

/// Number of columns in every feature vector
pub const FEATURE_DIMENSION: usize = 23;

/// Column names in model input order
pub const FEATURE_COLUMNS: [&str; FEATURE_DIMENSION] = [
    "Age",
    "Income",
    "Education_Level",
    "Travel_Frequency",
    "Vacation_Budget",
    "Proximity_to_Mountains",
    "Proximity_to_Beaches",
    "Pets",
    "Environmental_Concerns",
    "Gender_female",
    "Gender_male",
    "Gender_non-binary",
    "Preferred_Activities_hiking",
    "Preferred_Activities_skiing",
    "Preferred_Activities_sunbathing",
    "Preferred_Activities_swimming",
    "Location_rural",
    "Location_suburban",
    "Location_urban",
    "Favorite_Season_fall",
    "Favorite_Season_spring",
    "Favorite_Season_summer",
    "Favorite_Season_winter",
];

/// Column span of each one-hot group
pub const ONE_HOT_GROUPS: [(&str, Range<usize>); 4] = [
    ("Gender", 9..12),
    ("Preferred_Activities", 12..16),
    ("Location", 16..19),
    ("Favorite_Season", 19..23),
];

/// Position of a column by name
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|c| *c == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_the_tail_of_the_schema() {
        let mut next = ONE_HOT_GROUPS[0].1.start;
        for (prefix, span) in ONE_HOT_GROUPS.iter() {
            assert_eq!(span.start, next);
            for col in &FEATURE_COLUMNS[span.clone()] {
                assert!(col.starts_with(prefix), "{col} outside {prefix}");
            }
            next = span.end;
        }
        assert_eq!(next, FEATURE_DIMENSION);
    }

    #[test]
    fn test_column_names_are_unique() {
        for (i, col) in FEATURE_COLUMNS.iter().enumerate() {
            assert_eq!(column_index(col), Some(i));
        }
        assert_eq!(column_index("Favorite_Season_autumn"), None);
    }
}
