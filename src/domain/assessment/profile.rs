//! Profile3D - the result of one assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{round_to_tenth, Adequacy, Score};

use super::axes::RiderAxes;
use super::classifier::ProfileType;
use super::diagnostics::Diagnostics;
use super::metrics::{growth_potential, safety_index, DangerLevel};

/// A rider's position in risk/skill/adequacy space with derived metrics,
/// classification and diagnostic text.
///
/// Built in one step from a [`RiderAxes`] value and immutable afterwards.
/// Numeric fields are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile3D {
    risk_taking: Score,
    technical_skills: Score,
    adequacy: Adequacy,
    safety_index: f64,
    growth_potential: Score,
    danger_level: DangerLevel,
    profile_type: ProfileType,
    characteristics: Vec<String>,
    recommendations: Vec<String>,
    red_flags: Vec<String>,
}

impl Profile3D {
    /// Derives metrics, classification and diagnostics from unrounded axes.
    ///
    /// All decisions are taken on the unrounded values; rounding happens last.
    pub fn from_axes(axes: &RiderAxes) -> Self {
        let safety_index = safety_index(axes);
        let growth_potential = growth_potential(axes);
        let danger_level = DangerLevel::from_axes(axes);
        let profile_type = ProfileType::from_axes(axes);
        let Diagnostics {
            characteristics,
            recommendations,
            red_flags,
        } = Diagnostics::generate(axes, danger_level);

        Self {
            risk_taking: axes.risk_taking.rounded(),
            technical_skills: axes.technical_skills.rounded(),
            adequacy: axes.adequacy.rounded(),
            safety_index: round_to_tenth(safety_index),
            growth_potential: growth_potential.rounded(),
            danger_level,
            profile_type,
            characteristics,
            recommendations,
            red_flags,
        }
    }

    pub fn risk_taking(&self) -> Score {
        self.risk_taking
    }

    pub fn technical_skills(&self) -> Score {
        self.technical_skills
    }

    pub fn adequacy(&self) -> Adequacy {
        self.adequacy
    }

    pub fn safety_index(&self) -> f64 {
        self.safety_index
    }

    pub fn growth_potential(&self) -> Score {
        self.growth_potential
    }

    pub fn danger_level(&self) -> DangerLevel {
        self.danger_level
    }

    pub fn profile_type(&self) -> ProfileType {
        self.profile_type
    }

    pub fn characteristics(&self) -> &[String] {
        &self.characteristics
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn red_flags(&self) -> &[String] {
        &self.red_flags
    }

    /// Descriptive paragraph for the assigned profile type.
    pub fn description(&self) -> &'static str {
        self.profile_type.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn axes(risk: f64, skill: f64, adequacy: f64) -> RiderAxes {
        RiderAxes {
            risk_taking: Score::new(risk),
            technical_skills: Score::new(skill),
            adequacy: Adequacy::new(adequacy),
        }
    }

    #[test]
    fn rounds_numeric_fields_to_one_decimal() {
        let profile = Profile3D::from_axes(&axes(5.0 - 0.3 + 1.0, 4.04, 0.96));
        assert_eq!(profile.risk_taking().value(), 5.7);
        assert_eq!(profile.technical_skills().value(), 4.0);
        assert_eq!(profile.adequacy().value(), 1.0);
        assert_eq!(profile.safety_index(), -2.6);
    }

    #[test]
    fn classification_uses_unrounded_values() {
        // adequacy 2.04 rounds to 2.0 but still exceeds the strict > 2 bound.
        let profile = Profile3D::from_axes(&axes(7.5, 3.0, 2.04));
        assert_eq!(profile.profile_type(), ProfileType::DangerousNovice);
        assert_eq!(profile.adequacy().value(), 2.0);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let profile = Profile3D::from_axes(&axes(2.0, 7.5, -1.0));
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["riskTaking"], json!(2.0));
        assert_eq!(value["technicalSkills"], json!(7.5));
        assert_eq!(value["adequacy"], json!(-1.0));
        assert_eq!(value["safetyIndex"], json!(4.5));
        assert_eq!(value["dangerLevel"], json!("LOW"));
        assert_eq!(value["profileType"], json!("CAUTIOUS_EXPERT"));
        assert_eq!(value["redFlags"], json!([]));
    }

    #[test]
    fn round_trips_through_json() {
        let profile = Profile3D::from_axes(&axes(8.0, 2.0, 4.5));
        let json = serde_json::to_string(&profile).unwrap();
        let restored: Profile3D = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn rejects_out_of_range_persisted_values() {
        let profile = Profile3D::from_axes(&axes(8.0, 2.0, 4.5));
        let mut value = serde_json::to_value(&profile).unwrap();
        value["riskTaking"] = json!(12.0);
        assert!(serde_json::from_value::<Profile3D>(value).is_err());
    }
}
