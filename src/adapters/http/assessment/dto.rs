//! HTTP DTOs for assessment endpoints.
//!
//! The response shape groups the flat [`Profile3D`] into axes, metrics,
//! classification and visualization sections for the frontend.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{DangerLevel, Profile3D, ProfileType, VisualizationHints};
use crate::domain::questionnaire::QuestionnaireAnswers;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to calculate a profile from questionnaire answers.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateProfileRequest {
    pub answers: QuestionnaireAnswers,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CalculateProfileResponse {
    pub success: bool,
    pub profile: ProfileResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub axes: AxesResponse,
    pub metrics: MetricsResponse,
    pub classification: ClassificationResponse,
    pub visualization: VisualizationHints,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxesResponse {
    pub risk_taking: f64,
    pub technical_skills: f64,
    pub adequacy: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub safety_index: f64,
    pub growth_potential: f64,
    pub danger_level: DangerLevel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResponse {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub display_name: &'static str,
    pub description: &'static str,
    pub characteristics: Vec<String>,
    pub recommendations: Vec<String>,
    pub red_flags: Vec<String>,
}

impl From<Profile3D> for ProfileResponse {
    fn from(profile: Profile3D) -> Self {
        let visualization = VisualizationHints::from(&profile);
        let profile_type = profile.profile_type();

        Self {
            axes: AxesResponse {
                risk_taking: profile.risk_taking().value(),
                technical_skills: profile.technical_skills().value(),
                adequacy: profile.adequacy().value(),
            },
            metrics: MetricsResponse {
                safety_index: profile.safety_index(),
                growth_potential: profile.growth_potential().value(),
                danger_level: profile.danger_level(),
            },
            classification: ClassificationResponse {
                profile_type,
                display_name: profile_type.display_name(),
                description: profile_type.description(),
                characteristics: profile.characteristics().to_vec(),
                recommendations: profile.recommendations().to_vec(),
                red_flags: profile.red_flags().to_vec(),
            },
            visualization,
        }
    }
}

/// One entry of the profile taxonomy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTypeResponse {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Whether any classification rule can produce this type.
    pub assignable: bool,
}

impl From<ProfileType> for ProfileTypeResponse {
    fn from(profile_type: ProfileType) -> Self {
        Self {
            profile_type,
            display_name: profile_type.display_name(),
            description: profile_type.description(),
            assignable: profile_type.is_assignable(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTypesResponse {
    pub profile_types: Vec<ProfileTypeResponse>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::ProfileCalculator;
    use serde_json::json;

    #[test]
    fn calculate_request_deserializes() {
        let json = r#"{"answers": {"e1_1": "20-30", "e1_3": 9}}"#;
        let req: CalculateProfileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answers.len(), 2);
        assert_eq!(req.answers.integer("e1_3"), Some(9));
    }

    #[test]
    fn calculate_request_requires_answers() {
        assert!(serde_json::from_str::<CalculateProfileRequest>("{}").is_err());
        assert!(serde_json::from_str::<CalculateProfileRequest>(r#"{"answers": 3}"#).is_err());
    }

    #[test]
    fn profile_response_groups_sections() {
        let profile = ProfileCalculator::new(2025).calculate(&QuestionnaireAnswers::new());
        let value = serde_json::to_value(ProfileResponse::from(profile)).unwrap();

        assert_eq!(value["axes"]["riskTaking"], json!(5.0));
        assert_eq!(value["axes"]["technicalSkills"], json!(4.0));
        assert_eq!(value["axes"]["adequacy"], json!(1.0));
        assert_eq!(value["metrics"]["safetyIndex"], json!(-2.0));
        assert_eq!(value["metrics"]["growthPotential"], json!(6.8));
        assert_eq!(value["metrics"]["dangerLevel"], json!("MEDIUM"));
        assert_eq!(value["classification"]["type"], json!("BALANCED_RIDER"));
        assert_eq!(value["classification"]["redFlags"], json!([]));
        assert_eq!(value["visualization"]["position"]["z"], json!(6.0));
        assert_eq!(value["visualization"]["color"], json!("#eab308"));
    }

    #[test]
    fn profile_type_response_flags_unreachable_types() {
        let value = serde_json::to_value(ProfileTypeResponse::from(ProfileType::LuckySurvivor))
            .unwrap();
        assert_eq!(value["type"], json!("LUCKY_SURVIVOR"));
        assert_eq!(value["assignable"], json!(false));
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let response = ErrorResponse::bad_request("Invalid data format");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("BAD_REQUEST"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn not_found_names_the_resource() {
        let response = ErrorResponse::not_found("Profile type", "GHOST_RIDER");
        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Profile type not found: GHOST_RIDER");
    }
}
