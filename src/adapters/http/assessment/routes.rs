//! Route configuration for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    calculate_profile, get_profile_type, list_profile_types, run_calibration, AssessmentAppState,
};

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `POST /api/questionnaire/calculate-3d-profile` - Score questionnaire answers
/// - `GET /api/questionnaire/profile-types` - List every profile type
/// - `GET /api/questionnaire/profile-types/:profile_type` - Describe one profile type
/// - `GET /api/questionnaire/calibration` - Run reference riders (feature-flagged)
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route(
            "/api/questionnaire/calculate-3d-profile",
            post(calculate_profile),
        )
        .route("/api/questionnaire/profile-types", get(list_profile_types))
        .route(
            "/api/questionnaire/profile-types/:profile_type",
            get(get_profile_type),
        )
        .route("/api/questionnaire/calibration", get(run_calibration))
}
