//! Foundation module - Shared domain primitives.
//!
//! Contains the bounded score value objects and error types that form the
//! vocabulary of the assessment domain.

mod errors;
mod score;

pub use errors::ValidationError;
pub use score::{round_to_tenth, Adequacy, Score};
