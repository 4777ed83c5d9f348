//! Assessment configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::ProfileCalculator;

/// Earliest year accepted as a reference year.
pub const MIN_REFERENCE_YEAR: i32 = 1990;

/// Latest year accepted as a reference year.
pub const MAX_REFERENCE_YEAR: i32 = 2100;

/// Assessment configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AssessmentConfig {
    /// Year used to turn a riding start year into experience.
    /// Unset means the current UTC year.
    #[serde(default)]
    pub reference_year: Option<i32>,
}

impl AssessmentConfig {
    /// Builds the calculator this configuration describes.
    pub fn calculator(&self) -> ProfileCalculator {
        self.reference_year
            .map(ProfileCalculator::new)
            .unwrap_or_else(ProfileCalculator::for_current_year)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.reference_year {
            Some(year) if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year) => {
                Err(ValidationError::InvalidReferenceYear(year))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_year_is_used() {
        let config = AssessmentConfig {
            reference_year: Some(2024),
        };
        assert_eq!(config.calculator().current_year(), 2024);
    }

    #[test]
    fn test_unset_year_falls_back_to_current() {
        let config = AssessmentConfig::default();
        assert_eq!(
            config.calculator(),
            ProfileCalculator::for_current_year()
        );
    }

    #[test]
    fn test_implausible_year_is_rejected() {
        let config = AssessmentConfig {
            reference_year: Some(1850),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidReferenceYear(1850))
        );
        assert!(AssessmentConfig::default().validate().is_ok());
    }
}
