//! Assessment Module - Pure domain services for rider self-assessment.
//!
//! Turns a questionnaire answer map into a [`Profile3D`]: three axes, two
//! derived metrics, a danger level, an archetype and diagnostic text.
//!
//! # Components
//!
//! - `RiderAxes` - risk-taking, technical skill and self-assessment adequacy
//! - `DangerLevel` - four-tier danger scale from an ordered rule list
//! - `ProfileType` - rider archetypes and their descriptive paragraphs
//! - `Diagnostics` - characteristics, recommendations and red flags
//! - `ProfileCalculator` - the full pipeline with an injected reference year
//! - `VisualizationHints` - marker position, colour and size for the 3D view
//! - `CalibrationReport` - reference riders run through the current rules
//!
//! # Design Philosophy
//!
//! All functions are pure and deterministic. Given the same answers and the
//! same reference year, the same profile comes out. Missing or unrecognised
//! answers never fail the calculation; they fall back to baselines.

mod axes;
mod calculator;
mod calibration;
mod classifier;
mod diagnostics;
mod metrics;
mod profile;
mod rules;
mod visualization;

pub use axes::{
    adequacy, age_adjustment, experience_bonus, gear_adjustment, grip_adjustment, risk_taking,
    self_rating, speed_adjustment, technical_skills, wobble_adjustment, RiderAxes,
    DEFAULT_SELF_RATING, RISK_BASELINE, SKILL_BASELINE,
};
pub use calculator::{calculate_profile, ProfileCalculator};
pub use calibration::{
    reference_cases, CalibrationReport, CalibrationResult, CalibrationSummary, ReferenceCase,
};
pub use classifier::{
    describe_label, ProfileType, DEFAULT_PROFILE, PROFILE_RULES, UNKNOWN_PROFILE_DESCRIPTION,
};
pub use diagnostics::{
    self_assessment_label, Diagnostics, FLAG_CRITICAL_DANGER, FLAG_EXTREME_RISK,
    FLAG_OVERESTIMATION, RECOMMEND_REASSESS, RECOMMEND_REDUCE_SPEED, RECOMMEND_SKILLS_COURSE,
};
pub use metrics::{growth_potential, safety_index, DangerLevel, DANGER_RULES};
pub use profile::Profile3D;
pub use rules::{first_match, matching_rule, AssessmentSignals, Rule};
pub use visualization::{Position3D, VisualizationHints, MIN_MARKER_SIZE};
