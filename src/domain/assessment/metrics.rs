//! Derived metrics - safety index, growth potential and danger level.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

use super::axes::RiderAxes;
use super::rules::{first_match, AssessmentSignals, Rule};

/// `skill - risk - |adequacy|`. Left unclamped; the axis domains bound it to
/// roughly -20..=20.
pub fn safety_index(axes: &RiderAxes) -> f64 {
    AssessmentSignals::from_axes(axes).safety_index
}

/// Remaining upside: low current skill and underconfidence both leave room
/// to grow.
pub fn growth_potential(axes: &RiderAxes) -> Score {
    let mut potential = 5.0 + (10.0 - axes.technical_skills.value()) * 0.3;

    if axes.adequacy.is_underestimate() {
        potential += axes.adequacy.magnitude() * 0.5;
    }

    Score::new(potential)
}

/// Ordinal danger classification, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl DangerLevel {
    /// All levels, least severe first.
    pub const ALL: [DangerLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Evaluates [`DANGER_RULES`] in order; `Low` when none match.
    pub fn assess(signals: &AssessmentSignals) -> Self {
        first_match(DANGER_RULES, signals, DangerLevel::Low)
    }

    pub fn from_axes(axes: &RiderAxes) -> Self {
        Self::assess(&AssessmentSignals::from_axes(axes))
    }

    /// Wire identifier (`LOW`, `MEDIUM`, `HIGH`, `CRITICAL`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DangerLevel::Low => "LOW",
            DangerLevel::Medium => "MEDIUM",
            DangerLevel::High => "HIGH",
            DangerLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Danger rules, most severe first. First match wins.
pub static DANGER_RULES: &[Rule<DangerLevel>] = &[
    Rule {
        name: "critical: risky, unskilled and overconfident",
        outcome: DangerLevel::Critical,
        applies: |s| s.risk > 7.0 && s.skill < 4.0 && s.adequacy > 2.0,
    },
    Rule {
        name: "critical: very negative safety index",
        outcome: DangerLevel::Critical,
        applies: |s| s.safety_index < -5.0,
    },
    Rule {
        name: "high: risk far beyond skill",
        outcome: DangerLevel::High,
        applies: |s| s.risk > s.skill + 3.0,
    },
    Rule {
        name: "high: large self-assessment mismatch",
        outcome: DangerLevel::High,
        applies: |s| s.adequacy.abs() > 3.0,
    },
    Rule {
        name: "high: negative safety index",
        outcome: DangerLevel::High,
        applies: |s| s.safety_index < -2.0,
    },
    Rule {
        name: "medium: risk beyond skill",
        outcome: DangerLevel::Medium,
        applies: |s| s.risk > s.skill + 1.0,
    },
    Rule {
        name: "medium: noticeable self-assessment mismatch",
        outcome: DangerLevel::Medium,
        applies: |s| s.adequacy.abs() > 2.0,
    },
    Rule {
        name: "medium: thin safety margin",
        outcome: DangerLevel::Medium,
        applies: |s| s.safety_index < 2.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Adequacy;

    fn axes(risk: f64, skill: f64, adequacy: f64) -> RiderAxes {
        RiderAxes {
            risk_taking: Score::new(risk),
            technical_skills: Score::new(skill),
            adequacy: Adequacy::new(adequacy),
        }
    }

    fn level(risk: f64, skill: f64, adequacy: f64) -> DangerLevel {
        DangerLevel::assess(&AssessmentSignals::new(risk, skill, adequacy))
    }

    #[test]
    fn safety_index_rewards_skill_and_penalises_risk_and_mismatch() {
        assert_eq!(safety_index(&axes(2.0, 7.5, -1.0)), 4.5);
        assert_eq!(safety_index(&axes(10.0, 0.0, 5.0)), -15.0);
    }

    #[test]
    fn growth_potential_favours_low_skill() {
        assert_eq!(growth_potential(&axes(5.0, 10.0, 0.0)).value(), 5.0);
        assert!((growth_potential(&axes(5.0, 4.0, 1.0)).value() - 6.8).abs() < 1e-9);
    }

    #[test]
    fn growth_potential_adds_underconfidence_bonus() {
        // 5 + 3 * 0.3 + 3 * 0.5
        assert!((growth_potential(&axes(2.0, 7.0, -3.0)).value() - 7.4).abs() < 1e-9);
        // overconfidence adds nothing
        assert!((growth_potential(&axes(2.0, 7.0, 3.0)).value() - 5.9).abs() < 1e-9);
    }

    #[test]
    fn growth_potential_is_clamped() {
        assert_eq!(growth_potential(&axes(0.0, 0.0, -5.0)).value(), 10.0);
    }

    #[test]
    fn critical_for_risky_unskilled_overconfident() {
        assert_eq!(level(7.5, 3.5, 2.5), DangerLevel::Critical);
    }

    #[test]
    fn critical_for_very_negative_safety_index() {
        // safety = 4 - 9 - 1 = -6
        assert_eq!(level(9.0, 4.0, 1.0), DangerLevel::Critical);
    }

    #[test]
    fn high_when_risk_far_exceeds_skill() {
        // safety = 4 - 7.5 - 0 = -3.5 also high; risk > skill + 3 matches first
        assert_eq!(level(7.5, 4.0, 0.0), DangerLevel::High);
    }

    #[test]
    fn high_for_large_underestimation() {
        assert_eq!(level(2.0, 8.0, -3.5), DangerLevel::High);
    }

    #[test]
    fn high_at_boundary_safety_index() {
        // safety = 4 - 7 - 2 = -5: not critical, but below -2
        assert_eq!(level(7.0, 4.0, 2.0), DangerLevel::High);
    }

    #[test]
    fn medium_for_moderate_concerns() {
        assert_eq!(level(5.0, 3.5, 0.0), DangerLevel::Medium);
        assert_eq!(level(2.0, 8.0, -2.5), DangerLevel::Medium);
        assert_eq!(level(5.0, 4.0, 1.0), DangerLevel::Medium);
    }

    #[test]
    fn low_for_skilled_cautious_accurate_rider() {
        assert_eq!(level(2.0, 7.5, -1.0), DangerLevel::Low);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(DangerLevel::Low < DangerLevel::Medium);
        assert!(DangerLevel::Medium < DangerLevel::High);
        assert!(DangerLevel::High < DangerLevel::Critical);
    }

    #[test]
    fn danger_level_serializes_as_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&DangerLevel::Critical).unwrap(), "\"CRITICAL\"");
        let parsed: DangerLevel = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(parsed, DangerLevel::Medium);
        assert_eq!(DangerLevel::High.to_string(), "HIGH");
    }
}
