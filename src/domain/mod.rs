//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects and validation errors
//! - `questionnaire` - Answer map, categorical options and experience parsing
//! - `assessment` - Pure scoring, classification and diagnostics

pub mod assessment;
pub mod foundation;
pub mod questionnaire;
