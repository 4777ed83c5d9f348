//! HTTP adapter for the rider assessment endpoints.
//!
//! - `POST /api/questionnaire/calculate-3d-profile` - Score an answer map
//! - `GET /api/questionnaire/profile-types` - List the profile taxonomy
//! - `GET /api/questionnaire/profile-types/:profile_type` - One profile type
//! - `GET /api/questionnaire/calibration` - Run the reference riders

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
