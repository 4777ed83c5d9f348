//! Raw questionnaire answers as submitted by the questionnaire UI.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer keys read by the assessment.
///
/// Keys follow the experienced-rider questionnaire numbering (block, question).
pub mod keys {
    /// Age bracket (`20-30`, `30-40`, `40-50`, `50+`).
    pub const AGE_BRACKET: &str = "e1_1";
    /// Self-rated riding skill on a 1-10 scale.
    pub const SELF_RATING: &str = "e1_3";
    /// Calendar year the rider started riding.
    pub const START_YEAR: &str = "e1_start_year";
    /// Start-year slider of the current questionnaire revision. Only read
    /// when neither the start year nor the seasons label is answered.
    pub const RIDING_YEAR: &str = "e0_riding_year";
    /// Number of riding seasons (older questionnaire revision).
    pub const RIDING_SEASONS: &str = "e1_6";
    /// Protective gear habit.
    pub const GEAR_HABIT: &str = "e4_2";
    /// Upper bound of real cruising speed in the city.
    pub const CITY_SPEED: &str = "e7_1";
    /// How firmly the rider holds the handlebar.
    pub const HANDLEBAR_GRIP: &str = "e7_2";
    /// Reaction to a front-wheel wobble at 100+ km/h.
    pub const WOBBLE_RESPONSE: &str = "e9_1";

    /// Keys consulted for riding experience, in priority order.
    pub const EXPERIENCE: &[&str] = &[START_YEAR, RIDING_SEASONS, RIDING_YEAR];
}

/// Key/value answer map. No schema is enforced; absent or unexpected values
/// are simply ignored by the assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireAnswers(HashMap<String, Value>);

impl QuestionnaireAnswers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used for fixtures and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a non-blank string answer, trimmed.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// Returns an integer answer.
    ///
    /// Numbers are truncated toward zero; strings contribute their leading
    /// integer (`"7"`, `" 8/10"`). Anything else yields `None`.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Value::String(s) => leading_integer(s),
            _ => None,
        }
    }

    /// Returns the first value among `keys` that is not blank.
    ///
    /// Null, empty strings and zero count as blank.
    pub fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !is_blank(value))
    }
}

impl From<HashMap<String, Value>> for QuestionnaireAnswers {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QuestionnaireAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
