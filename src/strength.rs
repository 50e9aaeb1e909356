//! Score, strength categories and their display mapping.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;

/// Password score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score, clamping `raw` into `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Category band this score falls in.
    pub fn strength(self) -> StrengthCategory {
        StrengthCategory::from_score(self)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Five contiguous bands over the score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthCategory {
    pub const ALL: [StrengthCategory; 5] = [
        StrengthCategory::VeryWeak,
        StrengthCategory::Weak,
        StrengthCategory::Fair,
        StrengthCategory::Strong,
        StrengthCategory::VeryStrong,
    ];

    /// Bands: `<20`, `<40`, `<60`, `<80`, `>=80`.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..20 => StrengthCategory::VeryWeak,
            20..40 => StrengthCategory::Weak,
            40..60 => StrengthCategory::Fair,
            60..80 => StrengthCategory::Strong,
            _ => StrengthCategory::VeryStrong,
        }
    }

    /// Bootstrap-style semantic color token.
    pub fn color(self) -> &'static str {
        match self {
            StrengthCategory::VeryWeak | StrengthCategory::Weak => "danger",
            StrengthCategory::Fair => "warning",
            StrengthCategory::Strong => "info",
            StrengthCategory::VeryStrong => "success",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthCategory::VeryWeak => "Very Weak",
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Fair => "Fair",
            StrengthCategory::Strong => "Strong",
            StrengthCategory::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStrengthError {
    #[error("Unknown strength category: {0}")]
    Unknown(String),
}

impl FromStr for StrengthCategory {
    type Err = ParseStrengthError;

    /// Accepts `VeryWeak`, `very-weak`, `very_weak` and `Very Weak`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "veryweak" => Ok(StrengthCategory::VeryWeak),
            "weak" => Ok(StrengthCategory::Weak),
            "fair" => Ok(StrengthCategory::Fair),
            "strong" => Ok(StrengthCategory::Strong),
            "verystrong" => Ok(StrengthCategory::VeryStrong),
            _ => Err(ParseStrengthError::Unknown(s.to_string())),
        }
    }
}

/// Color token for a category given by name.
pub fn strength_color(strength: &str) -> Result<&'static str, ParseStrengthError> {
    strength.parse::<StrengthCategory>().map(StrengthCategory::color)
}

/// Display label for a category given by name.
pub fn strength_label(strength: &str) -> Result<&'static str, ParseStrengthError> {
    strength.parse::<StrengthCategory>().map(StrengthCategory::label)
}
