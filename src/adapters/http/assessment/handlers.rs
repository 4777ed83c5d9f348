//! HTTP handlers for assessment endpoints.
//!
//! The calculator is pure and synchronous, so handlers call it directly.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::config::FeatureFlags;
use crate::domain::assessment::{CalibrationReport, ProfileCalculator, ProfileType};

use super::dto::{
    CalculateProfileRequest, CalculateProfileResponse, ErrorResponse, ProfileResponse,
    ProfileTypeResponse, ProfileTypesResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Assessment API error that implements IntoResponse.
#[derive(Debug)]
pub enum AssessmentApiError {
    /// Request body could not be read as `{ "answers": {...} }`.
    InvalidBody { reason: Option<String> },
    NotFound { resource: &'static str, id: String },
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssessmentApiError::InvalidBody { reason } => {
                let error = ErrorResponse::bad_request("Invalid data format");
                let error = match reason {
                    Some(reason) => error.with_details(serde_json::Value::String(reason)),
                    None => error,
                };
                (StatusCode::BAD_REQUEST, error)
            }
            AssessmentApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for assessment handlers.
#[derive(Debug, Clone)]
pub struct AssessmentAppState {
    pub calculator: ProfileCalculator,
    pub features: FeatureFlags,
}

impl AssessmentAppState {
    pub fn new(calculator: ProfileCalculator, features: FeatureFlags) -> Self {
        Self {
            calculator,
            features,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/questionnaire/calculate-3d-profile
///
/// Scores the submitted answers. Only a body that is not an object with an
/// `answers` map is rejected; the answers themselves are never invalid.
pub async fn calculate_profile(
    State(state): State<AssessmentAppState>,
    payload: Result<Json<CalculateProfileRequest>, JsonRejection>,
) -> Result<Json<CalculateProfileResponse>, AssessmentApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected questionnaire payload");
        AssessmentApiError::InvalidBody {
            reason: state
                .features
                .verbose_errors
                .then(|| rejection.body_text()),
        }
    })?;

    let profile = state.calculator.calculate(&request.answers);

    info!(
        answer_count = request.answers.len(),
        profile_type = profile.profile_type().as_str(),
        danger_level = %profile.danger_level(),
        "Calculated 3D profile"
    );

    Ok(Json(CalculateProfileResponse {
        success: true,
        profile: ProfileResponse::from(profile),
    }))
}

/// GET /api/questionnaire/profile-types
pub async fn list_profile_types() -> Json<ProfileTypesResponse> {
    Json(ProfileTypesResponse {
        profile_types: ProfileType::ALL
            .into_iter()
            .map(ProfileTypeResponse::from)
            .collect(),
    })
}

/// GET /api/questionnaire/profile-types/:profile_type
///
/// Accepts the identifier (`DANGEROUS_NOVICE`) or the display name.
pub async fn get_profile_type(
    Path(label): Path<String>,
) -> Result<Json<ProfileTypeResponse>, AssessmentApiError> {
    let profile_type = label
        .parse::<ProfileType>()
        .map_err(|_| AssessmentApiError::NotFound {
            resource: "Profile type",
            id: label.clone(),
        })?;

    Ok(Json(ProfileTypeResponse::from(profile_type)))
}

/// GET /api/questionnaire/calibration
///
/// Runs the built-in reference riders. Answers 404 unless
/// `features.enable_calibration_endpoint` is set.
pub async fn run_calibration(
    State(state): State<AssessmentAppState>,
) -> Result<Json<CalibrationReport>, AssessmentApiError> {
    if !state.features.enable_calibration_endpoint {
        return Err(AssessmentApiError::NotFound {
            resource: "Endpoint",
            id: "calibration".to_string(),
        });
    }

    let report = CalibrationReport::run(&state.calculator);
    info!(
        total = report.summary.total_cases,
        matched = report.summary.matched_cases,
        "Ran calibration cases"
    );

    Ok(Json(report))
}
