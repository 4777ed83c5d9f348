//! Riding experience in years, derived from either a start year or a
//! seasons bracket.

use serde_json::Value;

use super::answers::{keys, QuestionnaireAnswers};
use super::options::{AnswerOption, RidingSeasons};

/// Shortest experience a start year can produce.
pub const MIN_EXPERIENCE_YEARS: f64 = 0.5;

/// Longest experience a start year can produce.
pub const MAX_EXPERIENCE_YEARS: f64 = 15.0;

/// Experience assumed when the answer is missing or unrecognised.
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 1.0;

/// Reads riding experience from the first non-blank experience key.
pub fn experience_years(answers: &QuestionnaireAnswers, current_year: i32) -> f64 {
    answers
        .first_present(keys::EXPERIENCE)
        .map(|value| years_from_value(value, current_year))
        .unwrap_or(DEFAULT_EXPERIENCE_YEARS)
}

/// Converts a single experience answer into years.
///
/// - a number or a four-digit string is a start year: `current_year - start`,
///   clamped to [0.5, 15]
/// - a seasons label maps to its bracket midpoint
/// - anything else counts as one year
pub fn years_from_value(value: &Value, current_year: i32) -> f64 {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|start| years_since(start, current_year))
            .unwrap_or(DEFAULT_EXPERIENCE_YEARS),
        Value::String(s) => {
            let s = s.trim();
            if is_four_digit_year(s) {
                s.parse::<f64>()
                    .map(|start| years_since(start, current_year))
                    .unwrap_or(DEFAULT_EXPERIENCE_YEARS)
            } else {
                RidingSeasons::from_label(s)
                    .map(|seasons| seasons.years())
                    .unwrap_or(DEFAULT_EXPERIENCE_YEARS)
            }
        }
        _ => DEFAULT_EXPERIENCE_YEARS,
    }
}

fn years_since(start_year: f64, current_year: i32) -> f64 {
    let years = f64::from(current_year) - start_year;
    if years.is_nan() {
        return DEFAULT_EXPERIENCE_YEARS;
    }
    years.clamp(MIN_EXPERIENCE_YEARS, MAX_EXPERIENCE_YEARS)
}

fn is_four_digit_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}
