//! Profile calculator - the entry point of the assessment pipeline.
//!
//! answers → axes → derived metrics → classification → diagnostics.

use chrono::{Datelike, Utc};
use tracing::debug;

use crate::domain::questionnaire::QuestionnaireAnswers;

use super::axes::RiderAxes;
use super::profile::Profile3D;

/// Computes [`Profile3D`] values from questionnaire answers.
///
/// The only external input is the year used to turn a start year into riding
/// experience; pinning it makes results fully reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileCalculator {
    current_year: i32,
}

impl ProfileCalculator {
    /// Creates a calculator with a fixed reference year.
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Creates a calculator for the current UTC year.
    pub fn for_current_year() -> Self {
        Self::new(Utc::now().year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Total over its input: missing or unrecognised answers fall back to
    /// baselines and every axis is clamped.
    pub fn calculate(&self, answers: &QuestionnaireAnswers) -> Profile3D {
        let axes = RiderAxes::from_answers(answers, self.current_year);
        let profile = Profile3D::from_axes(&axes);

        debug!(
            answer_count = answers.len(),
            risk_taking = axes.risk_taking.value(),
            technical_skills = axes.technical_skills.value(),
            adequacy = axes.adequacy.value(),
            danger_level = %profile.danger_level(),
            profile_type = profile.profile_type().as_str(),
            "Calculated rider profile"
        );

        profile
    }
}

impl Default for ProfileCalculator {
    fn default() -> Self {
        Self::for_current_year()
    }
}

/// Calculates a profile using the current UTC year.
pub fn calculate_profile(answers: &QuestionnaireAnswers) -> Profile3D {
    ProfileCalculator::for_current_year().calculate(answers)
}
