//! Calibration - reference answer sets with the archetype each was written
//! to represent.
//!
//! Running them shows at a glance which archetypes the current rule set can
//! actually reach. Mismatches are reported, not treated as failures.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::domain::questionnaire::{keys, QuestionnaireAnswers};

use super::calculator::ProfileCalculator;
use super::classifier::ProfileType;
use super::metrics::DangerLevel;
use super::profile::Profile3D;

/// One hand-written answer set and the archetype it portrays.
#[derive(Debug, Clone)]
pub struct ReferenceCase {
    pub name: &'static str,
    pub intended: ProfileType,
    pub answers: QuestionnaireAnswers,
}

/// The built-in reference riders.
pub fn reference_cases() -> Vec<ReferenceCase> {
    vec![
        ReferenceCase {
            name: "dangerous_novice",
            intended: ProfileType::DangerousNovice,
            answers: QuestionnaireAnswers::new()
                .with(keys::AGE_BRACKET, "20-30")
                .with(keys::SELF_RATING, 9)
                .with("e1_5", "Творча професія")
                .with(keys::RIDING_SEASONS, "Перший сезон")
                .with(keys::GEAR_HABIT, "Шолом, футболка, шльопкі")
                .with("e4_3", json!([]))
                .with("e4_4", "Агресивний")
                .with(keys::CITY_SPEED, "90-150 км/год")
                .with(keys::HANDLEBAR_GRIP, "Міцно, щоб контролювати")
                .with(keys::WOBBLE_RESPONSE, "Гальмувати"),
        },
        ReferenceCase {
            name: "cautious_expert",
            intended: ProfileType::CautiousExpert,
            answers: QuestionnaireAnswers::new()
                .with(keys::AGE_BRACKET, "40-50")
                .with(keys::SELF_RATING, 7)
                .with("e1_5", "Лікар")
                .with(keys::RIDING_SEASONS, "7+ сезонів")
                .with(keys::GEAR_HABIT, "В повному екіпі")
                .with("e4_3", json!(["Джимхана", "Трек виїзди"]))
                .with("e4_4", "Спокійний")
                .with(keys::CITY_SPEED, "40-70 км/год")
                .with(keys::HANDLEBAR_GRIP, "Легко, як філіжанку кави")
                .with(keys::WOBBLE_RESPONSE, "Розслабити руки, не гальмувати"),
        },
        ReferenceCase {
            name: "impostor_syndrome",
            intended: ProfileType::ImpostorSyndrome,
            answers: QuestionnaireAnswers::new()
                .with(keys::AGE_BRACKET, "30-40")
                .with(keys::SELF_RATING, 4)
                .with("e1_5", "Айтішник")
                .with(keys::RIDING_SEASONS, "3-7 сезонів")
                .with(keys::GEAR_HABIT, "В повному екіпі")
                .with("e4_3", json!(["Джимхана"]))
                .with("e4_4", "Спокійний")
                .with(keys::CITY_SPEED, "40-70 км/год")
                .with(keys::HANDLEBAR_GRIP, "Легко, як філіжанку кави")
                .with(keys::WOBBLE_RESPONSE, "Розслабити руки, не гальмувати"),
        },
        ReferenceCase {
            name: "lucky_survivor",
            intended: ProfileType::LuckySurvivor,
            answers: QuestionnaireAnswers::new()
                .with(keys::AGE_BRACKET, "20-30")
                .with(keys::SELF_RATING, 6)
                .with("e1_5", "Підприємець")
                .with(keys::RIDING_SEASONS, "2-3 сезони")
                .with(keys::GEAR_HABIT, "В легкому екіпі")
                .with("e4_3", json!([]))
                .with("e4_4", "Змішаний")
                .with(keys::CITY_SPEED, "70-90 км/год")
                .with(keys::HANDLEBAR_GRIP, "Залежить від дороги")
                .with(keys::WOBBLE_RESPONSE, "Розслабити руки, не гальмувати"),
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationResult {
    pub case_name: &'static str,
    pub intended: ProfileType,
    pub profile: Profile3D,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationSummary {
    pub total_cases: usize,
    pub matched_cases: usize,
    /// Display names of the whole taxonomy.
    pub profiles: Vec<&'static str>,
    /// Case count per danger level, least severe first.
    pub danger_levels: BTreeMap<DangerLevel, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub summary: CalibrationSummary,
    pub results: Vec<CalibrationResult>,
}

impl CalibrationReport {
    /// Runs the built-in reference cases.
    pub fn run(calculator: &ProfileCalculator) -> Self {
        Self::run_cases(calculator, reference_cases())
    }

    pub fn run_cases(calculator: &ProfileCalculator, cases: Vec<ReferenceCase>) -> Self {
        let results: Vec<CalibrationResult> = cases
            .into_iter()
            .map(|case| {
                let profile = calculator.calculate(&case.answers);
                CalibrationResult {
                    case_name: case.name,
                    intended: case.intended,
                    matched: profile.profile_type() == case.intended,
                    profile,
                }
            })
            .collect();

        let danger_levels = DangerLevel::ALL
            .into_iter()
            .map(|level| {
                let count = results
                    .iter()
                    .filter(|r| r.profile.danger_level() == level)
                    .count();
                (level, count)
            })
            .collect();

        let summary = CalibrationSummary {
            total_cases: results.len(),
            matched_cases: results.iter().filter(|r| r.matched).count(),
            profiles: ProfileType::ALL.iter().map(|p| p.display_name()).collect(),
            danger_levels,
        };

        Self { summary, results }
    }

    pub fn result(&self, case_name: &str) -> Option<&CalibrationResult> {
        self.results.iter().find(|r| r.case_name == case_name)
    }
}
