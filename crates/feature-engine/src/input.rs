//! Raw Form Input

use crate::error::EncodingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of categories for one input field.
///
/// `VARIANTS` lists the values in encoding order: lexical for the one-hot
/// groups, ascending for the ordinal education level. The trained model
/// depends on this order.
pub trait Category: Copy + Eq + Sized + 'static {
    /// Field name used in error messages
    const FIELD: &'static str;
    /// Variants in encoding order
    const VARIANTS: &'static [Self];

    /// Canonical spelling, as offered by the form
    fn as_str(&self) -> &'static str;

    /// Position of this value in `VARIANTS`
    fn index(&self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|v| v == self)
            .unwrap_or_default()
    }
}

/// Parse a category leniently: case, surrounding whitespace and
/// `_`/`-`/space separators are ignored.
pub fn parse_category<C: Category>(raw: &str) -> Result<C, EncodingError> {
    let wanted = normalize(raw);
    C::VARIANTS
        .iter()
        .copied()
        .find(|v| normalize(v.as_str()) == wanted)
        .ok_or_else(|| EncodingError::InvalidCategory {
            field: C::FIELD,
            value: raw.to_string(),
        })
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect()
}

macro_rules! category_traits {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = EncodingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_category(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Female,
    Male,
    #[serde(alias = "non_binary")]
    NonBinary,
}

impl Category for Gender {
    const FIELD: &'static str = "gender";
    const VARIANTS: &'static [Self] = &[Gender::Female, Gender::Male, Gender::NonBinary];

    fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::NonBinary => "non-binary",
        }
    }
}

category_traits!(Gender);

/// Highest completed education, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "high school", alias = "high_school")]
    HighSchool,
    #[serde(rename = "bachelor")]
    Bachelor,
    #[serde(rename = "master")]
    Master,
    #[serde(rename = "doctorate")]
    Doctorate,
}

impl Education {
    /// Ordinal level: high school=0, bachelor=1, master=2, doctorate=3
    pub fn ordinal(&self) -> u8 {
        match self {
            Education::HighSchool => 0,
            Education::Bachelor => 1,
            Education::Master => 2,
            Education::Doctorate => 3,
        }
    }
}

impl Category for Education {
    const FIELD: &'static str = "education";
    const VARIANTS: &'static [Self] = &[
        Education::HighSchool,
        Education::Bachelor,
        Education::Master,
        Education::Doctorate,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Education::HighSchool => "high school",
            Education::Bachelor => "bachelor",
            Education::Master => "master",
            Education::Doctorate => "doctorate",
        }
    }
}

category_traits!(Education);

/// Type of place the person lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Rural,
    Suburban,
    Urban,
}

impl Category for Location {
    const FIELD: &'static str = "location";
    const VARIANTS: &'static [Self] = &[Location::Rural, Location::Suburban, Location::Urban];

    fn as_str(&self) -> &'static str {
        match self {
            Location::Rural => "rural",
            Location::Suburban => "suburban",
            Location::Urban => "urban",
        }
    }
}

category_traits!(Location);

/// Preferred vacation activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Hiking,
    Skiing,
    Sunbathing,
    Swimming,
}

impl Category for Activity {
    const FIELD: &'static str = "activities";
    const VARIANTS: &'static [Self] = &[
        Activity::Hiking,
        Activity::Skiing,
        Activity::Sunbathing,
        Activity::Swimming,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Activity::Hiking => "hiking",
            Activity::Skiing => "skiing",
            Activity::Sunbathing => "sunbathing",
            Activity::Swimming => "swimming",
        }
    }
}

category_traits!(Activity);

/// Favorite season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Fall,
    Spring,
    Summer,
    Winter,
}

impl Category for Season {
    const FIELD: &'static str = "season";
    const VARIANTS: &'static [Self] = &[Season::Fall, Season::Spring, Season::Summer, Season::Winter];

    fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "fall",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Winter => "winter",
        }
    }
}

category_traits!(Season);

/// One prediction request as entered on the form.
///
/// Numeric ranges are enforced by the form (see `data-validator`), not here.
/// Missing fields deserialize to the form's initial values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub age: u32,
    pub gender: Gender,
    pub income: u32,
    pub education: Education,
    pub location: Location,
    /// Trips per year
    pub travel_frequency: u32,
    /// Dollars
    pub vacation_budget: u32,
    pub activities: Activity,
    pub season: Season,
    /// Miles
    pub proximity_mountains: u32,
    /// Miles
    pub proximity_beaches: u32,
    pub pets: bool,
    pub environmental_concerns: bool,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            income: 50_000,
            education: Education::HighSchool,
            location: Location::Urban,
            travel_frequency: 2,
            vacation_budget: 2_000,
            activities: Activity::Hiking,
            season: Season::Summer,
            proximity_mountains: 100,
            proximity_beaches: 100,
            pets: false,
            environmental_concerns: false,
        }
    }
}
