//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod assessment;
pub mod health;

use axum::Router;

// Re-export key types for convenience
pub use assessment::{assessment_router, AssessmentAppState};
pub use health::health_router;

/// Combines every endpoint into one router with its state applied.
pub fn api_router(state: AssessmentAppState) -> Router {
    assessment_router()
        .merge(health_router())
        .with_state(state)
}
