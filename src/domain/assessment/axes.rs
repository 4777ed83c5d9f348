//! Axis calculators - the three independent coordinates of a rider.
//!
//! Each calculator starts from a baseline, applies additive adjustments for
//! the answers it recognises and clamps the result into its domain. Absent or
//! unrecognised answers contribute nothing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Adequacy, Score};
use crate::domain::questionnaire::{
    experience_years, keys, AgeBracket, AnswerOption, CitySpeed, GearHabit, HandlebarGrip,
    QuestionnaireAnswers, WobbleResponse,
};

/// Neutral starting point for risk-taking.
pub const RISK_BASELINE: f64 = 5.0;

/// Starting point for technical skill before any experience is counted.
pub const SKILL_BASELINE: f64 = 2.0;

/// Self rating assumed when the answer is missing or unusable.
pub const DEFAULT_SELF_RATING: i64 = 5;

/// The three coordinates of a rider, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderAxes {
    pub risk_taking: Score,
    pub technical_skills: Score,
    pub adequacy: Adequacy,
}

impl RiderAxes {
    /// Computes all three axes from an answer set.
    pub fn from_answers(answers: &QuestionnaireAnswers, current_year: i32) -> Self {
        let risk_taking = risk_taking(answers);
        let technical_skills = technical_skills(answers, current_year);
        let adequacy = adequacy(answers, technical_skills, current_year);
        Self {
            risk_taking,
            technical_skills,
            adequacy,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Risk-taking
// ════════════════════════════════════════════════════════════════════════════

/// Risk-taking on 0-10: 0 is maximally cautious, 10 maximally risk-seeking.
pub fn risk_taking(answers: &QuestionnaireAnswers) -> Score {
    let mut score = RISK_BASELINE;

    if let Some(age) = AgeBracket::from_answers(answers) {
        score += age_adjustment(age);
    }
    if let Some(speed) = CitySpeed::from_answers(answers) {
        score += speed_adjustment(speed);
    }
    if let Some(gear) = GearHabit::from_answers(answers) {
        score += gear_adjustment(gear);
    }

    Score::new(score)
}

/// Shared by risk-taking and adequacy: younger riders lean bolder, older
/// riders more conservative.
pub fn age_adjustment(age: AgeBracket) -> f64 {
    match age {
        AgeBracket::Twenties => 0.5,
        AgeBracket::Thirties => 0.0,
        AgeBracket::Forties => -0.3,
        AgeBracket::FiftyPlus => -0.5,
    }
}

pub fn speed_adjustment(speed: CitySpeed) -> f64 {
    match speed {
        CitySpeed::Low => -2.0,
        CitySpeed::Moderate => 1.0,
        CitySpeed::High => 3.0,
    }
}

pub fn gear_adjustment(gear: GearHabit) -> f64 {
    match gear {
        GearHabit::Full => -1.0,
        GearHabit::Light => 0.5,
        GearHabit::Minimal => 2.0,
        GearHabit::DependsOnTrip => 0.0,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Technical skill
// ════════════════════════════════════════════════════════════════════════════

/// Technical skill on 0-10, from experience plus two diagnostic
/// emergency-technique answers.
pub fn technical_skills(answers: &QuestionnaireAnswers, current_year: i32) -> Score {
    let mut score = SKILL_BASELINE;

    score += experience_bonus(experience_years(answers, current_year));

    if let Some(response) = WobbleResponse::from_answers(answers) {
        score += wobble_adjustment(response);
    }
    if let Some(grip) = HandlebarGrip::from_answers(answers) {
        score += grip_adjustment(grip);
    }

    Score::new(score)
}

/// Coarse step function of riding experience.
pub fn experience_bonus(years: f64) -> f64 {
    if years < 1.0 {
        0.5
    } else if years < 3.0 {
        2.0
    } else if years < 7.0 {
        3.0
    } else {
        4.0
    }
}

pub fn wobble_adjustment(response: WobbleResponse) -> f64 {
    match response {
        WobbleResponse::RelaxNoBrake => 1.0,
        // Braking into a wobble loads the front and amplifies it.
        WobbleResponse::Brake => -1.0,
        WobbleResponse::HoldTight | WobbleResponse::Accelerate => 0.0,
    }
}

pub fn grip_adjustment(grip: HandlebarGrip) -> f64 {
    match grip {
        HandlebarGrip::Light => 0.5,
        // Major basic error: a death grip fights the bike's self-steering in turns.
        HandlebarGrip::Tight => -2.0,
        HandlebarGrip::DependsOnRoad => 0.0,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Adequacy
// ════════════════════════════════════════════════════════════════════════════

/// Self rating on the 1-10 scale.
///
/// Missing, unparseable and zero answers fall back to the midpoint. Values
/// outside the scale pass through; only the adequacy clamp bounds them.
pub fn self_rating(answers: &QuestionnaireAnswers) -> i64 {
    match answers.integer(keys::SELF_RATING) {
        Some(0) | None => DEFAULT_SELF_RATING,
        Some(rating) => rating,
    }
}

/// Self-assessment adequacy on -5..=5: self rating minus demonstrated skill.
///
/// Beginners get only a partial penalty for an ordinary high self rating and
/// the full one for an extreme rating; veterans who rate themselves low are
/// pushed toward underestimation.
pub fn adequacy(
    answers: &QuestionnaireAnswers,
    technical_skills: Score,
    current_year: i32,
) -> Adequacy {
    let rating = self_rating(answers);
    let experience = experience_years(answers, current_year);

    let mut adequacy = (rating as f64) - technical_skills.value().round();

    if let Some(age) = AgeBracket::from_answers(answers) {
        adequacy += age_adjustment(age);
    }

    adequacy += experience_correction(experience, rating);

    Adequacy::new(adequacy)
}

fn experience_correction(experience_years: f64, rating: i64) -> f64 {
    if experience_years < 1.0 && rating >= 9 {
        2.0
    } else if experience_years < 1.0 && rating >= 7 {
        1.5
    } else if experience_years > 7.0 && rating < 5 {
        -2.0
    } else {
        0.0
    }
}
