//! Categorical answer options recognised by the assessment.
//!
//! Each option accepts the questionnaire label shown to riders plus an ASCII
//! token alias. Label lookup is case-insensitive and ignores surrounding
//! whitespace; anything unrecognised is treated as "no answer".

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::answers::{keys, QuestionnaireAnswers};

/// A categorical answer read from a single questionnaire key.
pub trait AnswerOption: Copy + Sized + 'static {
    /// Key the option is read from.
    const KEY: &'static str;

    /// Every accepted label with the variant it selects.
    const LABELS: &'static [(&'static str, Self)];

    /// Lowercased label index, built once.
    fn index() -> &'static HashMap<String, Self>;

    /// Resolves a raw label.
    fn from_label(label: &str) -> Option<Self> {
        Self::index().get(&label.trim().to_lowercase()).copied()
    }

    /// Reads the option from an answer set.
    fn from_answers(answers: &QuestionnaireAnswers) -> Option<Self> {
        answers.text(Self::KEY).and_then(Self::from_label)
    }
}

fn build_index<T: Copy>(labels: &[(&'static str, T)]) -> HashMap<String, T> {
    labels
        .iter()
        .map(|(label, option)| (label.to_lowercase(), *option))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Age bracket
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Twenties,
    Thirties,
    Forties,
    FiftyPlus,
}

static AGE_BRACKET_INDEX: Lazy<HashMap<String, AgeBracket>> =
    Lazy::new(|| build_index(AgeBracket::LABELS));

impl AnswerOption for AgeBracket {
    const KEY: &'static str = keys::AGE_BRACKET;
    const LABELS: &'static [(&'static str, Self)] = &[
        ("20-30", Self::Twenties),
        ("30-40", Self::Thirties),
        ("40-50", Self::Forties),
        ("50+", Self::FiftyPlus),
    ];

    fn index() -> &'static HashMap<String, Self> {
        &AGE_BRACKET_INDEX
    }
}

// ════════════════════════════════════════════════════════════════════════════
// City speed
// ════════════════════════════════════════════════════════════════════════════

/// Upper bound of real cruising speed in the city. Ordered slowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitySpeed {
    /// 40-70 km/h
    Low,
    /// 70-90 km/h
    Moderate,
    /// 90-150 km/h
    High,
}

static CITY_SPEED_INDEX: Lazy<HashMap<String, CitySpeed>> =
    Lazy::new(|| build_index(CitySpeed::LABELS));

impl AnswerOption for CitySpeed {
    const KEY: &'static str = keys::CITY_SPEED;
    const LABELS: &'static [(&'static str, Self)] = &[
        ("40-70 км/год", Self::Low),
        ("40-70", Self::Low),
        ("70-90 км/год", Self::Moderate),
        ("70-90", Self::Moderate),
        ("90-150 км/год", Self::High),
        ("90-150", Self::High),
    ];

    fn index() -> &'static HashMap<String, Self> {
        &CITY_SPEED_INDEX
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gear habit
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearHabit {
    Full,
    Light,
    /// Helmet, t-shirt and flip-flops.
    Minimal,
    DependsOnTrip,
}

static GEAR_HABIT_INDEX: Lazy<HashMap<String, GearHabit>> =
    Lazy::new(|| build_index(GearHabit::LABELS));

impl AnswerOption for GearHabit {
    const KEY: &'static str = keys::GEAR_HABIT;
    const LABELS: &'static [(&'static str, Self)] = &[
        ("В повному екіпі", Self::Full),
        ("full_gear", Self::Full),
        ("В легкому екіпі", Self::Light),
        ("light_gear", Self::Light),
        ("Шолом, футболка, шльопкі", Self::Minimal),
        ("minimal_gear", Self::Minimal),
        ("Залежить від поїздки", Self::DependsOnTrip),
        ("depends_on_trip", Self::DependsOnTrip),
    ];

    fn index() -> &'static HashMap<String, Self> {
        &GEAR_HABIT_INDEX
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Handlebar grip
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlebarGrip {
    /// "Firmly, to stay in control" - degrades steering in turns.
    Tight,
    /// "Lightly, like a cup of coffee"
    Light,
    DependsOnRoad,
}

static HANDLEBAR_GRIP_INDEX: Lazy<HashMap<String, HandlebarGrip>> =
    Lazy::new(|| build_index(HandlebarGrip::LABELS));

impl AnswerOption for HandlebarGrip {
    const KEY: &'static str = keys::HANDLEBAR_GRIP;
    const LABELS: &'static [(&'static str, Self)] = &[
        ("Міцно, щоб контролювати", Self::Tight),
        ("tight", Self::Tight),
        ("Легко, як філіжанку кави", Self::Light),
        ("light", Self::Light),
        ("Залежить від дороги", Self::DependsOnRoad),
        ("depends_on_road", Self::DependsOnRoad),
    ];

    fn index() -> &'static HashMap<String, Self> {
        &HANDLEBAR_GRIP_INDEX
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wobble response
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WobbleResponse {
    /// Relax the arms, do not brake.
    RelaxNoBrake,
    Brake,
    HoldTight,
    Accelerate,
}

static WOBBLE_RESPONSE_INDEX: Lazy<HashMap<String, WobbleResponse>> =
    Lazy::new(|| build_index(WobbleResponse::LABELS));

impl AnswerOption for WobbleResponse {
    const KEY: &'static str = keys::WOBBLE_RESPONSE;
    const LABELS: &'static [(&'static str, Self)] = &[
        ("Розслабити руки, не гальмувати", Self::RelaxNoBrake),
        ("relax_no_brake", Self::RelaxNoBrake),
        ("Гальмувати", Self::Brake),
        ("brake", Self::Brake),
        ("Міцно тримати кермо", Self::HoldTight),
        ("hold_tight", Self::HoldTight),
        ("Прискоритись", Self::Accelerate),
        ("accelerate", Self::Accelerate),
    ];

    fn index() -> &'static HashMap<String, Self> {
        &WOBBLE_RESPONSE_INDEX
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Riding seasons
// ════════════════════════════════════════════════════════════════════════════

/// Coarse experience answer used before the start-year slider existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RidingSeasons {
    First,
    TwoToThree,
    ThreeToSeven,
    SevenPlus,
}

impl RidingSeasons {
    /// Midpoint of the bracket in years.
    pub fn years(&self) -> f64 {
        match self {
            Self::First => 0.5,
            Self::TwoToThree => 2.5,
            Self::ThreeToSeven => 5.0,
            Self::SevenPlus => 8.0,
        }
    }
}

static RIDING_SEASONS_INDEX: Lazy<HashMap<String, RidingSeasons>> =
    Lazy::new(|| build_index(RidingSeasons::LABELS));

impl AnswerOption for RidingSeasons {
    const KEY: &'static str = keys::RIDING_SEASONS;
    const LABELS: &'static [(&'static str, Self)] = &[
        ("Перший сезон", Self::First),
        ("first_season", Self::First),
        ("2-3 сезони", Self::TwoToThree),
        ("2-3_seasons", Self::TwoToThree),
        ("3-7 сезонів", Self::ThreeToSeven),
        ("3-7_seasons", Self::ThreeToSeven),
        ("7+ сезонів", Self::SevenPlus),
        ("7+_seasons", Self::SevenPlus),
    ];

    fn index() -> &'static HashMap<String, Self> {
        &RIDING_SEASONS_INDEX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_questionnaire_labels() {
        assert_eq!(CitySpeed::from_label("90-150 км/год"), Some(CitySpeed::High));
        assert_eq!(GearHabit::from_label("Шолом, футболка, шльопкі"), Some(GearHabit::Minimal));
        assert_eq!(
            WobbleResponse::from_label("Розслабити руки, не гальмувати"),
            Some(WobbleResponse::RelaxNoBrake)
        );
        assert_eq!(HandlebarGrip::from_label("Міцно, щоб контролювати"), Some(HandlebarGrip::Tight));
        assert_eq!(RidingSeasons::from_label("7+ сезонів"), Some(RidingSeasons::SevenPlus));
    }

    #[test]
    fn resolves_ascii_aliases_case_insensitively() {
        assert_eq!(GearHabit::from_label("FULL_GEAR"), Some(GearHabit::Full));
        assert_eq!(WobbleResponse::from_label(" Brake "), Some(WobbleResponse::Brake));
        assert_eq!(CitySpeed::from_label("40-70"), Some(CitySpeed::Low));
    }

    #[test]
    fn ukrainian_labels_match_regardless_of_case() {
        assert_eq!(GearHabit::from_label("в повному екіпі"), Some(GearHabit::Full));
        assert_eq!(WobbleResponse::from_label("ГАЛЬМУВАТИ"), Some(WobbleResponse::Brake));
    }

    #[test]
    fn unknown_labels_are_ignored() {
        assert_eq!(AgeBracket::from_label("18-20"), None);
        assert_eq!(CitySpeed::from_label(""), None);
        assert_eq!(RidingSeasons::from_label("Yamaha MT-09"), None);
    }

    #[test]
    fn reads_options_from_answers() {
        let answers = QuestionnaireAnswers::new()
            .with(keys::AGE_BRACKET, "50+")
            .with(keys::CITY_SPEED, 90);

        assert_eq!(AgeBracket::from_answers(&answers), Some(AgeBracket::FiftyPlus));
        // Non-string values never match a categorical option.
        assert_eq!(CitySpeed::from_answers(&answers), None);
        assert_eq!(GearHabit::from_answers(&answers), None);
    }

    #[test]
    fn city_speed_is_ordered_slowest_first() {
        assert!(CitySpeed::Low < CitySpeed::Moderate);
        assert!(CitySpeed::Moderate < CitySpeed::High);
    }

    #[test]
    fn season_brackets_map_to_midpoints() {
        assert_eq!(RidingSeasons::First.years(), 0.5);
        assert_eq!(RidingSeasons::TwoToThree.years(), 2.5);
        assert_eq!(RidingSeasons::ThreeToSeven.years(), 5.0);
        assert_eq!(RidingSeasons::SevenPlus.years(), 8.0);
    }
}
