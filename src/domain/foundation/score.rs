//! Bounded score value objects for the assessment axes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Rounds to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A value on the 0 to 10 scale (risk-taking, technical skill, growth potential).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    /// Lowest possible score.
    pub const ZERO: Self = Self(Self::MIN);

    /// Creates a new Score, clamping to the valid range.
    ///
    /// NaN collapses to zero so the range invariant holds for any input.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns a copy rounded to one decimal place.
    pub fn rounded(&self) -> Self {
        Self::new(round_to_tenth(self.0))
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/10", self.0)
    }
}

/// Signed self-assessment mismatch on the -5 to +5 scale.
///
/// Negative values mean the rider underestimates themselves, positive values
/// mean they overestimate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Adequacy(f64);

impl Adequacy {
    pub const MIN: f64 = -5.0;
    pub const MAX: f64 = 5.0;

    /// Perfectly accurate self-assessment.
    pub const ACCURATE: Self = Self(0.0);

    /// Creates a new Adequacy, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ACCURATE;
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates an Adequacy, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "adequacy",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Magnitude of the mismatch regardless of direction.
    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }

    /// Returns a copy rounded to one decimal place.
    pub fn rounded(&self) -> Self {
        Self::new(round_to_tenth(self.0))
    }

    pub fn is_overestimate(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_underestimate(&self) -> bool {
        self.0 < 0.0
    }
}

impl TryFrom<f64> for Adequacy {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Adequacy> for f64 {
    fn from(adequacy: Adequacy) -> Self {
        adequacy.0
    }
}

impl Default for Adequacy {
    fn default() -> Self {
        Self::ACCURATE
    }
}

impl fmt::Display for Adequacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.1}", self.0)
    }
}
