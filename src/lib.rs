//! Rider Profile - Motorcycle Rider Self-Assessment Classifier
//!
//! This crate scores a rider's questionnaire answers into a three-dimensional
//! profile (risk-taking, technical skill, self-assessment adequacy), assigns a
//! danger level and an archetype, and serves the result over HTTP.

pub mod adapters;
pub mod config;
pub mod domain;
