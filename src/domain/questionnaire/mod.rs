//! Questionnaire module - the input vocabulary of the assessment.
//!
//! # Components
//!
//! - `QuestionnaireAnswers` - schema-less answer map submitted by the UI
//! - `AnswerOption` and its implementors - categorical answers the scoring reads
//! - `experience_years` - riding experience from a start year or seasons bracket

mod answers;
mod experience;
mod options;

pub use answers::{keys, QuestionnaireAnswers};
pub use experience::{
    experience_years, years_from_value, DEFAULT_EXPERIENCE_YEARS, MAX_EXPERIENCE_YEARS,
    MIN_EXPERIENCE_YEARS,
};
pub use options::{
    AgeBracket, AnswerOption, CitySpeed, GearHabit, HandlebarGrip, RidingSeasons, WobbleResponse,
};
