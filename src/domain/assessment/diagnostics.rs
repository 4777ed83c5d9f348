//! Diagnostics generator - human-readable text derived from computed values.
//!
//! Reads only the axes and danger level; never consults the questionnaire.

use serde::{Deserialize, Serialize};

use super::axes::RiderAxes;
use super::metrics::DangerLevel;

pub const RECOMMEND_REDUCE_SPEED: &str = "ТЕРМІНОВО знизити швидкість їзди";
pub const RECOMMEND_SKILLS_COURSE: &str = "Пройти курс контраварійного водіння";
pub const RECOMMEND_REASSESS: &str = "Чесно переоцінити свої навички";

pub const FLAG_CRITICAL_DANGER: &str = "⚠️ КРИТИЧНИЙ РІВЕНЬ НЕБЕЗПЕКИ";
pub const FLAG_EXTREME_RISK: &str = "Екстремально високий рівень ризику";
pub const FLAG_OVERESTIMATION: &str = "Небезпечна переоцінка своїх можливостей";

/// Characteristics, recommendations and red flags for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Always exactly three entries: risk, skill, self-assessment.
    pub characteristics: Vec<String>,
    pub recommendations: Vec<String>,
    pub red_flags: Vec<String>,
}

impl Diagnostics {
    pub fn generate(axes: &RiderAxes, danger_level: DangerLevel) -> Self {
        Self {
            characteristics: characteristics(axes),
            recommendations: recommendations(axes),
            red_flags: red_flags(axes, danger_level),
        }
    }
}

/// Self-assessment direction, judged on the rounded adequacy.
pub fn self_assessment_label(axes: &RiderAxes) -> &'static str {
    let adequacy = axes.adequacy.rounded();
    if adequacy.is_overestimate() {
        "overestimates"
    } else if adequacy.is_underestimate() {
        "underestimates"
    } else {
        "accurate"
    }
}

fn characteristics(axes: &RiderAxes) -> Vec<String> {
    vec![
        format!("Risk level: {:.1}/10", axes.risk_taking.value()),
        format!("Skills level: {:.1}/10", axes.technical_skills.value()),
        format!("Self-assessment: {}", self_assessment_label(axes)),
    ]
}

fn recommendations(axes: &RiderAxes) -> Vec<String> {
    let mut out = Vec::new();
    if axes.risk_taking.value() > 7.0 {
        out.push(RECOMMEND_REDUCE_SPEED.to_string());
    }
    if axes.technical_skills.value() < 4.0 {
        out.push(RECOMMEND_SKILLS_COURSE.to_string());
    }
    if axes.adequacy.value() > 3.0 {
        out.push(RECOMMEND_REASSESS.to_string());
    }
    out
}

fn red_flags(axes: &RiderAxes, danger_level: DangerLevel) -> Vec<String> {
    let mut out = Vec::new();
    if danger_level == DangerLevel::Critical {
        out.push(FLAG_CRITICAL_DANGER.to_string());
    }
    if axes.risk_taking.value() > 8.0 {
        out.push(FLAG_EXTREME_RISK.to_string());
    }
    if axes.adequacy.value() > 4.0 {
        out.push(FLAG_OVERESTIMATION.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Adequacy, Score};

    fn axes(risk: f64, skill: f64, adequacy: f64) -> RiderAxes {
        RiderAxes {
            risk_taking: Score::new(risk),
            technical_skills: Score::new(skill),
            adequacy: Adequacy::new(adequacy),
        }
    }

    #[test]
    fn characteristics_always_has_three_entries() {
        let d = Diagnostics::generate(&axes(5.0, 4.0, 1.0), DangerLevel::Medium);
        assert_eq!(
            d.characteristics,
            vec![
                "Risk level: 5.0/10".to_string(),
                "Skills level: 4.0/10".to_string(),
                "Self-assessment: overestimates".to_string(),
            ]
        );
    }

    #[test]
    fn characteristics_format_one_decimal() {
        let d = Diagnostics::generate(&axes(1.7, 7.5, -1.3), DangerLevel::Low);
        assert_eq!(d.characteristics[0], "Risk level: 1.7/10");
        assert_eq!(d.characteristics[1], "Skills level: 7.5/10");
        assert_eq!(d.characteristics[2], "Self-assessment: underestimates");
    }

    #[test]
    fn tiny_adequacy_rounds_to_accurate() {
        assert_eq!(self_assessment_label(&axes(5.0, 5.0, 0.0)), "accurate");
        assert_eq!(self_assessment_label(&axes(5.0, 5.0, 0.04)), "accurate");
        assert_eq!(self_assessment_label(&axes(5.0, 5.0, -0.04)), "accurate");
    }

    #[test]
    fn recommendations_in_fixed_order() {
        let d = Diagnostics::generate(&axes(8.0, 3.0, 4.0), DangerLevel::Critical);
        assert_eq!(
            d.recommendations,
            vec![RECOMMEND_REDUCE_SPEED, RECOMMEND_SKILLS_COURSE, RECOMMEND_REASSESS]
        );
    }

    #[test]
    fn recommendation_thresholds_are_strict() {
        let d = Diagnostics::generate(&axes(7.0, 4.0, 3.0), DangerLevel::High);
        assert!(d.recommendations.is_empty());
    }

    #[test]
    fn red_flags_in_fixed_order() {
        let d = Diagnostics::generate(&axes(9.0, 1.0, 5.0), DangerLevel::Critical);
        assert_eq!(
            d.red_flags,
            vec![FLAG_CRITICAL_DANGER, FLAG_EXTREME_RISK, FLAG_OVERESTIMATION]
        );
    }

    #[test]
    fn red_flags_empty_for_safe_rider() {
        let d = Diagnostics::generate(&axes(2.0, 7.5, -1.0), DangerLevel::Low);
        assert!(d.red_flags.is_empty());
        assert!(d.recommendations.is_empty());
    }

    #[test]
    fn critical_level_alone_raises_alert() {
        let d = Diagnostics::generate(&axes(7.5, 1.0, 1.0), DangerLevel::Critical);
        assert_eq!(d.red_flags, vec![FLAG_CRITICAL_DANGER]);
    }
}
